use serde::{Deserialize, Serialize};

/// Documents an issuer publishes to describe a card: where to submit the
/// issuance response and how to display the result.
///
/// Display and schema documents are carried as opaque JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicContract {
    pub id: String,
    pub input: InputContract,
    #[serde(default)]
    pub display: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputContract {
    pub id: String,
    /// Endpoint receiving the signed issuance response.
    pub credential_issuer: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestations: Option<serde_json::Value>,
}
