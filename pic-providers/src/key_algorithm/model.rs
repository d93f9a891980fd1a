use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use zeroize::Zeroizing;

#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyAlgorithmType {
    #[strum(serialize = "ES256")]
    Es256,
    #[strum(serialize = "ES256K")]
    Es256k,
    #[strum(serialize = "EDDSA")]
    Eddsa,
    #[strum(serialize = "RS256")]
    Rs256,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedPublicKeyJwk {
    pub public_key_bytes: Vec<u8>,
    pub signer_algorithm_id: String,
}

pub struct GeneratedKey {
    pub public: Vec<u8>,
    pub private: Zeroizing<Vec<u8>>,
}

/// Key generation parameters in the WebCrypto shape used by wallets, e.g.
/// `{ "name": "ECDSA", "namedCurve": "P-256K" }` or
/// `{ "name": "RSASSA-PKCS1-v1_5", "modulusLength": 2048, "hash": "SHA-256" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAlgorithm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_curve: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modulus_length: Option<usize>,
}

impl CryptoAlgorithm {
    pub fn ecdsa(named_curve: impl Into<String>) -> Self {
        Self {
            name: "ECDSA".to_string(),
            named_curve: Some(named_curve.into()),
            hash: Some("SHA-256".to_string()),
            modulus_length: None,
        }
    }

    pub fn eddsa() -> Self {
        Self {
            name: "EdDSA".to_string(),
            named_curve: Some("Ed25519".to_string()),
            hash: None,
            modulus_length: None,
        }
    }

    pub fn rsa(modulus_length: usize) -> Self {
        Self {
            name: "RSASSA-PKCS1-v1_5".to_string(),
            named_curve: None,
            hash: Some("SHA-256".to_string()),
            modulus_length: Some(modulus_length),
        }
    }
}
