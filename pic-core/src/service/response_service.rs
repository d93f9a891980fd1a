//! Fetching requests from issuers and relying parties, and answering them with
//! signed responses.

use std::sync::Arc;

use pic_providers::{
    common_models::{
        card::{Card, VerifiableCredential},
        did::Identifier,
    },
    exchange_protocol::model::{
        IssuanceRequest, IssuanceResponse, OidcRequestContent, PresentationRequest,
        PresentationResponse,
    },
    jose::jws::{verifier::TokenVerifier, JwsToken},
    repository::{model::ServiceResponse, CardRepository},
    response_formatter::oidc::OidcResponseFormatter,
};

use super::error::ServiceError;
use crate::model::IssuanceServiceResponse;

pub struct ResponseService {
    repository: Arc<dyn CardRepository>,
    formatter: Arc<OidcResponseFormatter>,
    verifier: Arc<dyn TokenVerifier>,
    expires_in_minutes: u32,
}

impl ResponseService {
    pub fn new(
        repository: Arc<dyn CardRepository>,
        formatter: Arc<OidcResponseFormatter>,
        verifier: Arc<dyn TokenVerifier>,
        expires_in_minutes: u32,
    ) -> Self {
        Self {
            repository,
            formatter,
            verifier,
            expires_in_minutes,
        }
    }

    pub async fn get_issuance_request(
        &self,
        contract_url: &str,
    ) -> Result<IssuanceRequest, ServiceError> {
        let contract = self.repository.get_contract(contract_url).await?;
        Ok(IssuanceRequest::new(contract, contract_url))
    }

    /// Fetches a request token and accepts it only if its signature verifies
    /// against the requester's published key.
    pub async fn get_presentation_request(
        &self,
        url: &str,
    ) -> Result<PresentationRequest, ServiceError> {
        let serialized = self.repository.get_request(url).await?;
        let token = JwsToken::deserialize(&serialized)?;
        token.verify(self.verifier.as_ref()).await?;

        let content: OidcRequestContent = token.payload_as()?;
        PresentationRequest::new(serialized, content).map_err(ServiceError::from)
    }

    /// Sends the signed response and returns the card built from the issued
    /// credential.
    pub async fn send_issuance_response(
        &self,
        response: IssuanceResponse,
        responder: &Identifier,
    ) -> Result<Card, ServiceError> {
        let url = response.audience.to_owned();
        let display = response.request.contract.display.to_owned();

        let token = self
            .formatter
            .form_and_sign_response(&response.into(), responder, self.expires_in_minutes)
            .await?;

        tracing::debug!(%url, did = %responder.id, "sending issuance response");
        let service_response = self.repository.send_issuance_response(&url, &token).await?;

        let body: IssuanceServiceResponse = serde_json::from_str(&service_response.body)
            .map_err(|e| ServiceError::MappingError(e.to_string()))?;
        let verifiable_credential = VerifiableCredential::from_raw(body.vc)?;

        Ok(Card {
            card_type: verifiable_credential
                .contents
                .vc
                .r#type
                .last()
                .cloned()
                .unwrap_or_default(),
            owner: responder.id.to_owned(),
            verifiable_credential,
            display: Some(display),
        })
    }

    pub async fn send_presentation_response(
        &self,
        response: PresentationResponse,
        responder: &Identifier,
    ) -> Result<ServiceResponse, ServiceError> {
        let url = response.audience.to_owned();
        let state = response.request.content.state.to_owned();

        let token = self
            .formatter
            .form_and_sign_response(&response.into(), responder, self.expires_in_minutes)
            .await?;

        tracing::debug!(%url, did = %responder.id, "sending presentation response");
        Ok(self
            .repository
            .send_presentation_response(&url, &token, state)
            .await?)
    }
}
