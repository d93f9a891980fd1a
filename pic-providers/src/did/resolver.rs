use std::sync::Arc;

use super::{error::ResolverError, model::IdentifierDocument};
use crate::repository::IdentifierRepository;

/// Resolves DIDs through a resolver endpoint. Does not retry.
pub struct Resolver {
    base_url: String,
    identifier_repository: Arc<dyn IdentifierRepository>,
}

impl Resolver {
    pub fn new(
        base_url: impl Into<String>,
        identifier_repository: Arc<dyn IdentifierRepository>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            identifier_repository,
        }
    }

    pub async fn resolve(&self, identifier: &str) -> Result<IdentifierDocument, ResolverError> {
        tracing::debug!(%identifier, "resolving identifier");

        match self
            .identifier_repository
            .resolve_identifier(&self.base_url, identifier)
            .await
        {
            Ok(envelope) => Ok(envelope.did_document.into()),
            Err(cause) => {
                tracing::warn!(%identifier, %cause, "identifier resolution failed");
                Err(ResolverError {
                    identifier: identifier.to_owned(),
                    cause,
                })
            }
        }
    }
}
