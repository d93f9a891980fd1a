use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ExchangeProtocolError;
use crate::common_models::{card::Card, contract::PicContract};

/// Contract fetched from an issuer, to be answered with an issuance response.
#[derive(Clone, Debug, PartialEq)]
pub struct IssuanceRequest {
    pub contract: PicContract,
    pub contract_url: String,
}

impl IssuanceRequest {
    pub fn new(contract: PicContract, contract_url: impl Into<String>) -> Self {
        Self {
            contract,
            contract_url: contract_url.into(),
        }
    }

    /// Issuer's DID, used as audience of nested presentations.
    pub fn entity_identifier(&self) -> &str {
        &self.contract.input.issuer
    }
}

/// Verified presentation request from a relying party.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationRequest {
    pub serialized_token: String,
    pub content: OidcRequestContent,
    pub entity_identifier: String,
}

impl PresentationRequest {
    /// The requester is `iss`, or `client_id` for requests that omit it.
    /// Requests naming neither are rejected, nested presentations need an audience.
    pub fn new(
        serialized_token: impl Into<String>,
        content: OidcRequestContent,
    ) -> Result<Self, ExchangeProtocolError> {
        let entity_identifier = content
            .iss
            .as_ref()
            .or(content.client_id.as_ref())
            .filter(|requester| !requester.is_empty())
            .cloned()
            .ok_or(ExchangeProtocolError::MissingRequester)?;

        Ok(Self {
            serialized_token: serialized_token.into(),
            content,
            entity_identifier,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OidcRequestContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default)]
    pub redirect_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<serde_json::Value>,
}

/// Everything the user agreed to share.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectedAttestations {
    /// Issuer to id token.
    pub id_tokens: BTreeMap<String, String>,
    /// Claim name to value.
    pub self_issued_claims: BTreeMap<String, String>,
    /// Credential type to card.
    pub cards: BTreeMap<String, Card>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IssuanceResponse {
    pub request: IssuanceRequest,
    pub audience: String,
    pub collected: CollectedAttestations,
}

impl IssuanceResponse {
    /// Addressed to the contract's credential issuer endpoint.
    pub fn new(request: IssuanceRequest) -> Self {
        Self {
            audience: request.contract.input.credential_issuer.to_owned(),
            request,
            collected: Default::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PresentationResponse {
    pub request: PresentationRequest,
    pub audience: String,
    pub collected: CollectedAttestations,
}

impl PresentationResponse {
    /// Addressed to the request's redirect uri.
    pub fn new(request: PresentationRequest) -> Self {
        Self {
            audience: request.content.redirect_uri.to_owned(),
            request,
            collected: Default::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    Issuance(IssuanceResponse),
    Presentation(PresentationResponse),
}

impl Response {
    pub fn audience(&self) -> &str {
        match self {
            Response::Issuance(response) => &response.audience,
            Response::Presentation(response) => &response.audience,
        }
    }

    pub fn collected(&self) -> &CollectedAttestations {
        match self {
            Response::Issuance(response) => &response.collected,
            Response::Presentation(response) => &response.collected,
        }
    }

    pub fn collected_mut(&mut self) -> &mut CollectedAttestations {
        match self {
            Response::Issuance(response) => &mut response.collected,
            Response::Presentation(response) => &mut response.collected,
        }
    }

    /// Audience of the presentations nested in this response.
    pub fn presentation_audience(&self) -> &str {
        match self {
            Response::Issuance(response) => response.request.entity_identifier(),
            Response::Presentation(response) => &response.request.entity_identifier,
        }
    }
}

impl From<IssuanceResponse> for Response {
    fn from(value: IssuanceResponse) -> Self {
        Self::Issuance(value)
    }
}

impl From<PresentationResponse> for Response {
    fn from(value: PresentationResponse) -> Self {
        Self::Presentation(value)
    }
}
