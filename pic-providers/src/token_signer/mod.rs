//! Signing of canonical payloads with an identifier's signature key.

use async_trait::async_trait;

use crate::common_models::did::Identifier;

use error::TokenSignerError;

pub mod error;
pub mod imp;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait TokenSigner: Send + Sync {
    /// Signs `payload` and returns the compact serialized token.
    async fn sign_with_identifier(
        &self,
        payload: &str,
        identifier: &Identifier,
    ) -> Result<String, TokenSignerError>;
}
