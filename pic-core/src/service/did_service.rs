//! Resolution of DIDs to their identifier documents.

use std::sync::Arc;

use pic_providers::{
    common_models::did::DidValue,
    did::{model::IdentifierDocument, resolver::Resolver},
};

use super::error::ServiceError;

pub struct DidService {
    pub resolver: Arc<Resolver>,
}

impl DidService {
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self { resolver }
    }

    pub async fn resolve_did(&self, did: &DidValue) -> Result<IdentifierDocument, ServiceError> {
        Ok(self.resolver.resolve(did.as_str()).await?)
    }
}
