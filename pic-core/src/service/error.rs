use thiserror::Error;

use pic_providers::{
    did::error::{RegistrarError, ResolverError},
    exchange_protocol::error::ExchangeProtocolError,
    jose::error::JoseError,
    key_algorithm::error::KeyAlgorithmError,
    key_storage::error::{KeyDerivationError, KeyStoreError},
    repository::error::RepositoryError,
    response_formatter::error::CryptoError,
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Resolver error: `{0}`")]
    Resolver(#[from] ResolverError),
    #[error("Registrar error: `{0}`")]
    Registrar(#[from] RegistrarError),
    #[error("Crypto error: `{0}`")]
    Crypto(#[from] CryptoError),
    #[error("Repository error: `{0}`")]
    Repository(#[from] RepositoryError),
    #[error("Key store error: `{0}`")]
    KeyStore(#[from] KeyStoreError),
    #[error("Key derivation error: `{0}`")]
    KeyDerivation(#[from] KeyDerivationError),
    #[error("Key algorithm error: `{0}`")]
    KeyAlgorithm(#[from] KeyAlgorithmError),
    #[error("Token error: `{0}`")]
    Jose(#[from] JoseError),
    #[error("Exchange protocol error: `{0}`")]
    ExchangeProtocol(#[from] ExchangeProtocolError),
    #[error("Mapping error: `{0}`")]
    MappingError(String),
}
