//! Network operations the exchange core depends on.

use async_trait::async_trait;

use crate::common_models::contract::PicContract;

use error::RepositoryError;
use model::{ResolutionEnvelope, ServiceResponse};

pub mod error;
pub mod imp;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait IdentifierRepository: Send + Sync {
    async fn resolve_identifier(
        &self,
        base_url: &str,
        identifier: &str,
    ) -> Result<ResolutionEnvelope, RepositoryError>;
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CardRepository: Send + Sync {
    async fn get_contract(&self, url: &str) -> Result<PicContract, RepositoryError>;

    /// Fetches a serialized presentation request token.
    async fn get_request(&self, url: &str) -> Result<String, RepositoryError>;

    async fn send_issuance_response(
        &self,
        url: &str,
        token: &str,
    ) -> Result<ServiceResponse, RepositoryError>;

    async fn send_presentation_response(
        &self,
        url: &str,
        token: &str,
        state: Option<String>,
    ) -> Result<ServiceResponse, RepositoryError>;
}
