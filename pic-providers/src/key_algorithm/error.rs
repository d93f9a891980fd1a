use thiserror::Error;

use pic_crypto::{HasherError, SignerError};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyAlgorithmProviderError {
    #[error("No key algorithm registered for `{0}`")]
    UnknownAlgorithm(String),
    #[error("No signer available: `{0}`")]
    UnknownSigner(String),
}

/// Conversion between key bytes and JWKs failed.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyAlgorithmError {
    #[error("Invalid key: `{0}`")]
    InvalidKey(String),
    #[error("Unsupported curve `{0}`")]
    UnsupportedCurve(String),
    #[error(transparent)]
    Signer(#[from] SignerError),
    #[error(transparent)]
    Hasher(#[from] HasherError),
}
