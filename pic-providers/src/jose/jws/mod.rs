//! JSON Web Signature model.

use std::collections::HashMap;

use ct_codecs::{Base64UrlSafeNoPadding, Decoder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::{
    decode_b64url, encode_b64url,
    error::{HeaderDecodeError, JoseError},
    ALG, KID,
};
use crate::common_models::did::DidValue;

pub mod verifier;


use verifier::TokenVerifier;

/// Protected header written by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsHeader {
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsSignature {
    /// Base64url encoded JSON object.
    pub protected: String,
    /// Unprotected header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HashMap<String, String>>,
    pub signature: String,
}

impl JwsSignature {
    pub fn get_kid(&self) -> Result<Option<String>, HeaderDecodeError> {
        self.get_member(KID)
    }

    pub fn get_alg(&self) -> Result<Option<String>, HeaderDecodeError> {
        self.get_member(ALG)
    }

    /// Looks `member` up in the protected header, then in the unprotected one.
    ///
    /// Non-string values are returned as their JSON text.
    pub fn get_member(&self, member: &str) -> Result<Option<String>, HeaderDecodeError> {
        if let Some(value) = decode_protected_header(&self.protected)?.remove(member) {
            return Ok(Some(match value {
                Value::String(value) => value,
                other => other.to_string(),
            }));
        }

        Ok(self
            .header
            .as_ref()
            .and_then(|header| header.get(member))
            .cloned())
    }
}

fn decode_protected_header(
    protected: &str,
) -> Result<serde_json::Map<String, Value>, HeaderDecodeError> {
    if protected.is_empty() {
        return Ok(Default::default());
    }

    let bytes = Base64UrlSafeNoPadding::decode_to_vec(protected, None)
        .map_err(|e| HeaderDecodeError::Base64(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| HeaderDecodeError::Utf8(e.to_string()))?;

    match serde_json::from_str(&text).map_err(|e| HeaderDecodeError::Json(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(HeaderDecodeError::Json(format!(
            "expected object, found {other}"
        ))),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JwsFormat {
    /// `protected.payload.signature`
    Compact,
    /// `{ "payload", "signatures": [..] }`
    GeneralJson,
    /// `{ "payload", "protected", "header", "signature" }`
    FlatJson,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JwsToken {
    /// Base64url encoded payload.
    pub payload: String,
    pub signatures: Vec<JwsSignature>,
}

#[derive(Serialize, Deserialize)]
struct GeneralJsonJws {
    payload: String,
    signatures: Vec<JwsSignature>,
}

#[derive(Serialize, Deserialize)]
struct FlatJsonJws {
    payload: String,
    #[serde(flatten)]
    signature: JwsSignature,
}

impl JwsToken {
    pub fn new(payload: &[u8]) -> Result<Self, JoseError> {
        Ok(Self {
            payload: encode_b64url(payload)?,
            signatures: vec![],
        })
    }

    pub fn payload_bytes(&self) -> Result<Vec<u8>, JoseError> {
        decode_b64url(&self.payload)
    }

    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, JoseError> {
        serde_json::from_slice(&self.payload_bytes()?)
            .map_err(|e| JoseError::Payload(e.to_string()))
    }

    /// The bytes a signature covers: `protected.payload`.
    pub fn signing_input(&self, protected: &str) -> String {
        format!("{protected}.{}", self.payload)
    }

    /// Signs the token with `sign` and appends the signature.
    pub fn sign<F>(
        &mut self,
        header: &JwsHeader,
        unprotected: Option<HashMap<String, String>>,
        sign: F,
    ) -> Result<(), JoseError>
    where
        F: FnOnce(&[u8]) -> Result<Vec<u8>, pic_crypto::SignerError>,
    {
        let header =
            serde_json::to_vec(header).map_err(|e| JoseError::Serialization(e.to_string()))?;
        let protected = encode_b64url(header)?;
        let signature = sign(self.signing_input(&protected).as_bytes())?;

        self.signatures.push(JwsSignature {
            protected,
            header: unprotected,
            signature: encode_b64url(signature)?,
        });
        Ok(())
    }

    pub fn serialize(&self, format: JwsFormat) -> Result<String, JoseError> {
        match format {
            JwsFormat::Compact => {
                let [signature] = self.signatures.as_slice() else {
                    return Err(JoseError::Serialization(format!(
                        "compact form needs exactly one signature, token has {}",
                        self.signatures.len()
                    )));
                };
                if signature.header.is_some() {
                    return Err(JoseError::Serialization(
                        "compact form cannot carry an unprotected header".to_string(),
                    ));
                }
                Ok(format!(
                    "{}.{}.{}",
                    signature.protected, self.payload, signature.signature
                ))
            }
            JwsFormat::GeneralJson => serde_json::to_string(&GeneralJsonJws {
                payload: self.payload.to_owned(),
                signatures: self.signatures.to_owned(),
            })
            .map_err(|e| JoseError::Serialization(e.to_string())),
            JwsFormat::FlatJson => {
                let signature = self
                    .signatures
                    .first()
                    .ok_or(JoseError::MissingSignature)?
                    .to_owned();
                serde_json::to_string(&FlatJsonJws {
                    payload: self.payload.to_owned(),
                    signature,
                })
                .map_err(|e| JoseError::Serialization(e.to_string()))
            }
        }
    }

    /// Reads compact, general JSON or flattened JSON serializations.
    pub fn deserialize(token: &str) -> Result<Self, JoseError> {
        let token = token.trim();

        if token.starts_with('{') {
            let value: Value = serde_json::from_str(token)
                .map_err(|e| JoseError::MalformedToken(e.to_string()))?;

            return if value.get("signatures").is_some() {
                let jws: GeneralJsonJws = serde_json::from_value(value)
                    .map_err(|e| JoseError::MalformedToken(e.to_string()))?;
                Ok(Self {
                    payload: jws.payload,
                    signatures: jws.signatures,
                })
            } else {
                let jws: FlatJsonJws = serde_json::from_value(value)
                    .map_err(|e| JoseError::MalformedToken(e.to_string()))?;
                Ok(Self {
                    payload: jws.payload,
                    signatures: vec![jws.signature],
                })
            };
        }

        let mut parts = token.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(protected), Some(payload), Some(signature), None) => Ok(Self {
                payload: payload.to_owned(),
                signatures: vec![JwsSignature {
                    protected: protected.to_owned(),
                    header: None,
                    signature: signature.to_owned(),
                }],
            }),
            _ => Err(JoseError::MalformedToken(
                "expected three dot separated parts".to_string(),
            )),
        }
    }

    /// Verifies every signature. The issuer DID is taken from the `kid`
    /// (`did#fragment`).
    pub async fn verify(&self, verifier: &dyn TokenVerifier) -> Result<(), JoseError> {
        if self.signatures.is_empty() {
            return Err(JoseError::MissingSignature);
        }

        for signature in &self.signatures {
            let algorithm = signature
                .get_alg()?
                .ok_or(JoseError::MissingHeaderMember(ALG))?;
            let kid = signature.get_kid()?;
            let issuer = kid
                .as_deref()
                .and_then(|kid| kid.split('#').next())
                .filter(|did| !did.is_empty())
                .map(DidValue::from);

            let input = self.signing_input(&signature.protected);
            let signature_bytes = decode_b64url(&signature.signature)?;

            verifier
                .verify(
                    issuer,
                    kid.as_deref(),
                    &algorithm,
                    input.as_bytes(),
                    &signature_bytes,
                )
                .await?;
        }

        Ok(())
    }
}
