//! Enumerates errors related to key storage.

use thiserror::Error;

use crate::key_algorithm::error::KeyAlgorithmError;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyStoreError {
    #[error("Key not found: `{0}`")]
    NotFound(String),
    #[error("Key `{reference}` is not a {expected}")]
    WrongKeyKind {
        reference: String,
        expected: &'static str,
    },
    #[error("Missing key algorithm `{0}`")]
    MissingKeyAlgorithm(String),
    #[error("Key algorithm error: `{0}`")]
    KeyAlgorithm(#[from] KeyAlgorithmError),
    #[error("Key store unavailable: `{0}`")]
    Unavailable(String),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyDerivationError {
    #[error("Seed `{0}` cannot be used for derivation")]
    UnusableSeed(String),
    #[error("Unsupported derivation algorithm: `{0}`")]
    UnsupportedAlgorithm(String),
    #[error("Key store error: `{0}`")]
    KeyStore(#[from] KeyStoreError),
    #[error("Derivation failed: `{0}`")]
    Derivation(#[from] pic_crypto::KeyDerivationError),
}
