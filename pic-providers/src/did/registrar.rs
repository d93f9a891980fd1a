use async_trait::async_trait;

use super::error::RegistrarError;
use crate::common_models::did::Identifier;

/// Anchors a new identifier with its DID method.
///
/// Returns the identifier as registered, which may carry a different `id` than
/// the one passed in (e.g. a long-form DID replaced by its short form).
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Registrar: Send + Sync {
    async fn register(&self, identifier: Identifier) -> Result<Identifier, RegistrarError>;
}
