use thiserror::Error;

use pic_crypto::SignerError;

/// The protected header exists but cannot be read. Distinct from a member
/// simply being absent.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum HeaderDecodeError {
    #[error("Protected header is not base64url: `{0}`")]
    Base64(String),
    #[error("Protected header is not UTF-8: `{0}`")]
    Utf8(String),
    #[error("Protected header is not a JSON object: `{0}`")]
    Json(String),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum JoseError {
    #[error("Header error: `{0}`")]
    Header(#[from] HeaderDecodeError),
    #[error("Malformed token: `{0}`")]
    MalformedToken(String),
    #[error("Missing header member `{0}`")]
    MissingHeaderMember(&'static str),
    #[error("Payload error: `{0}`")]
    Payload(String),
    #[error("Serialization error: `{0}`")]
    Serialization(String),
    #[error("Token carries no signature")]
    MissingSignature,
    #[error("Signature error: `{0}`")]
    Signature(#[from] SignerError),
}
