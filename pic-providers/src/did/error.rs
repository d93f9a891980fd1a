//! Enumerates errors related to DIDs.

use thiserror::Error;

use crate::repository::error::RepositoryError;

/// Resolution failed. Keeps the identifier and the repository failure intact.
#[derive(Debug, Error)]
#[error("Unable to resolve identifier {identifier}")]
pub struct ResolverError {
    pub identifier: String,
    #[source]
    pub cause: RepositoryError,
}

#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error("Registration network error: `{0}`")]
    Network(String),
    #[error("Identifier already registered: `{0}`")]
    Conflict(String),
    #[error("Identifier rejected: `{0}`")]
    Validation(String),
}
