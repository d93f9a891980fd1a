use serde::{Deserialize, Serialize};

use crate::{common_dto::PublicKeyJwkDTO, common_models::did::DidValue};

/// Identifier document as served by resolvers. Older documents list keys under
/// `publicKey`, newer ones under `verificationMethod`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierDocumentDTO {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    pub id: DidValue,
    #[serde(alias = "publicKey", default)]
    pub verification_method: Vec<IdentifierDocumentPublicKeyDTO>,
    #[serde(alias = "services", default, skip_serializing_if = "Vec::is_empty")]
    pub service: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierDocumentPublicKeyDTO {
    pub id: String,
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    #[serde(alias = "jwk")]
    pub public_key_jwk: PublicKeyJwkDTO,
}
