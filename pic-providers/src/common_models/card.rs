use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    common_models::did::DidValue,
    jose::{error::JoseError, jws::JwsToken},
};

/// A credential held by the user, labelled with its credential type.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub card_type: String,
    pub owner: DidValue,
    pub verifiable_credential: VerifiableCredential,
    pub display: Option<Value>,
}

/// A signed credential token together with its decoded payload.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifiableCredential {
    pub jti: String,
    /// Compact token exactly as received from the issuer.
    pub raw: String,
    pub contents: VerifiableCredentialContent,
}

impl VerifiableCredential {
    /// Decodes the payload of a compact credential token. The signature is not
    /// checked here.
    pub fn from_raw(raw: impl Into<String>) -> Result<Self, JoseError> {
        let raw = raw.into();
        let contents: VerifiableCredentialContent = JwsToken::deserialize(&raw)?.payload_as()?;

        Ok(Self {
            jti: contents.jti.to_owned(),
            raw,
            contents,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifiableCredentialContent {
    pub jti: String,
    pub vc: VerifiableCredentialDescriptor,
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredentialDescriptor {
    #[serde(rename = "@context")]
    pub context: Vec<String>,
    pub r#type: Vec<String>,
    pub credential_subject: Map<String, Value>,
}
