use thiserror::Error;

use crate::{
    key_algorithm::error::KeyAlgorithmError, key_storage::error::KeyStoreError,
    token_signer::error::TokenSignerError,
};

/// Failure of one step while forming a response.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum FormatterError {
    #[error("Key store error: `{0}`")]
    KeyStore(#[from] KeyStoreError),
    #[error("Key algorithm error: `{0}`")]
    KeyAlgorithm(#[from] KeyAlgorithmError),
    #[error("Missing hasher: `{0}`")]
    MissingHasher(String),
    #[error("Serialization error: `{0}`")]
    Serialization(String),
    #[error("Token signer error: `{0}`")]
    TokenSigner(#[from] TokenSignerError),
    #[error("A presentation carries exactly one credential, got {0}")]
    SingleCredentialRequired(usize),
}

impl From<serde_json::Error> for FormatterError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}

/// The only failure callers of response formatting see.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("Unable to sign response contents")]
pub struct CryptoError {
    #[source]
    pub cause: FormatterError,
}
