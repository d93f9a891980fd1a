use thiserror::Error;

use pic_crypto::SignerError;

use crate::{
    jose::error::JoseError, key_algorithm::error::KeyAlgorithmProviderError,
    key_storage::error::KeyStoreError,
};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum TokenSignerError {
    #[error("Key store error: `{0}`")]
    KeyStore(#[from] KeyStoreError),
    #[error("Key algorithm error: `{0}`")]
    KeyAlgorithm(#[from] KeyAlgorithmProviderError),
    #[error("Signer error: `{0}`")]
    Signer(#[from] SignerError),
    #[error("JOSE error: `{0}`")]
    Jose(#[from] JoseError),
}
