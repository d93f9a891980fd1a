//! JOSE building blocks: JWS signatures, header lookup and serialization.

use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};

use error::JoseError;

pub mod error;
pub mod jws;

pub const KID: &str = "kid";
pub const ALG: &str = "alg";

pub(crate) fn encode_b64url(input: impl AsRef<[u8]>) -> Result<String, JoseError> {
    Base64UrlSafeNoPadding::encode_to_string(input)
        .map_err(|e| JoseError::Serialization(e.to_string()))
}

pub(crate) fn decode_b64url(input: &str) -> Result<Vec<u8>, JoseError> {
    Base64UrlSafeNoPadding::decode_to_vec(input, None)
        .map_err(|e| JoseError::MalformedToken(e.to_string()))
}
