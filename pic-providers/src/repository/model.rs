use serde::{Deserialize, Serialize};

use crate::did::dto::IdentifierDocumentDTO;

/// Resolver output wrapping the identifier document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionEnvelope {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    pub did_document: IdentifierDocumentDTO,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_document_metadata: Option<serde_json::Value>,
}

/// What a relying party or issuer returned for a submitted response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: String,
}
