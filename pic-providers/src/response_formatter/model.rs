use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common_dto::PublicKeyJwkDTO;
use crate::common_models::did::DidValue;

/// Payload of a signed self-issued response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcResponseContent {
    /// JWK thumbprint of `sub_jwk`.
    pub sub: String,
    pub aud: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    pub did: DidValue,
    pub sub_jwk: PublicKeyJwkDTO,
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub jti: String,
    /// Contract url, issuance only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    pub attestations: AttestationResponse,
}

/// Each map is absent rather than empty when nothing of that kind was collected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_issued: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentations: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiablePresentationContent {
    pub jti: String,
    pub vp: VerifiablePresentationDescriptor,
    pub iss: DidValue,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub aud: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiablePresentationDescriptor {
    /// Raw credential tokens.
    pub verifiable_credential: Vec<String>,
    #[serde(rename = "@context")]
    pub context: Vec<String>,
    pub r#type: Vec<String>,
}
