//! Repository backed by an [`HttpClient`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    common_models::contract::PicContract,
    http_client::{HttpClient, HttpError, HttpRequest, HttpResponse},
    repository::{
        error::RepositoryError,
        model::{ResolutionEnvelope, ServiceResponse},
        CardRepository, IdentifierRepository,
    },
};


pub struct HttpRepository {
    client: Arc<dyn HttpClient>,
}

#[derive(Serialize)]
struct PresentationResponseForm<'a> {
    id_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
}

impl HttpRepository {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RepositoryError> {
        let url = request.url.to_owned();

        self.client
            .send(request)
            .await
            .and_then(HttpResponse::error_for_status)
            .map_err(|error| match error {
                HttpError::Status { status, body } => RepositoryError::Status { url, status, body },
                HttpError::Request(reason) => RepositoryError::InvalidRequest(reason),
                other => RepositoryError::Network(other.to_string()),
            })
    }
}

fn invalid_response(url: &str) -> impl FnOnce(HttpError) -> RepositoryError + '_ {
    move |error| RepositoryError::InvalidResponse {
        url: url.to_owned(),
        reason: error.to_string(),
    }
}

fn service_response(url: &str, response: HttpResponse) -> Result<ServiceResponse, RepositoryError> {
    Ok(ServiceResponse {
        status: response.status,
        body: response.text().map_err(invalid_response(url))?,
    })
}

#[async_trait]
impl IdentifierRepository for HttpRepository {
    async fn resolve_identifier(
        &self,
        base_url: &str,
        identifier: &str,
    ) -> Result<ResolutionEnvelope, RepositoryError> {
        let url = format!("{}/{identifier}", base_url.trim_end_matches('/'));

        self.execute(HttpRequest::get(&url))
            .await?
            .json()
            .map_err(invalid_response(&url))
    }
}

#[async_trait]
impl CardRepository for HttpRepository {
    async fn get_contract(&self, url: &str) -> Result<PicContract, RepositoryError> {
        self.execute(HttpRequest::get(url))
            .await?
            .json()
            .map_err(invalid_response(url))
    }

    async fn get_request(&self, url: &str) -> Result<String, RepositoryError> {
        let token = self
            .execute(HttpRequest::get(url))
            .await?
            .text()
            .map_err(invalid_response(url))?;

        Ok(token.trim().to_owned())
    }

    async fn send_issuance_response(
        &self,
        url: &str,
        token: &str,
    ) -> Result<ServiceResponse, RepositoryError> {
        tracing::debug!(%url, "sending issuance response");

        let response = self.execute(HttpRequest::post(url).text(token)).await?;
        service_response(url, response)
    }

    async fn send_presentation_response(
        &self,
        url: &str,
        token: &str,
        state: Option<String>,
    ) -> Result<ServiceResponse, RepositoryError> {
        tracing::debug!(%url, "sending presentation response");

        let request = HttpRequest::post(url)
            .form(&PresentationResponseForm {
                id_token: token,
                state: state.as_deref(),
            })
            .map_err(|e| RepositoryError::InvalidRequest(e.to_string()))?;

        let response = self.execute(request).await?;
        service_response(url, response)
    }
}
