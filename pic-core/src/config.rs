use serde::Deserialize;

use pic_providers::{
    exchange_protocol::RESPONSE_EXPIRATION_IN_MINUTES, key_algorithm::model::CryptoAlgorithm,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PicCoreConfig {
    pub resolver: ResolverConfig,
    pub response: ResponseConfig,
    pub identifier: IdentifierConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    pub resolver_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseConfig {
    pub expires_in_minutes: u32,
}

/// Parameters for new pairwise identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentifierConfig {
    /// Method of the provisional DID handed to the registrar.
    pub did_method: String,
    pub key_algorithm: CryptoAlgorithm,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolver_url: "https://beta.discover.did.microsoft.com/1.0/identifiers".to_string(),
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            expires_in_minutes: RESPONSE_EXPIRATION_IN_MINUTES,
        }
    }
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            did_method: "ion".to_string(),
            key_algorithm: CryptoAlgorithm::ecdsa("P-256K"),
        }
    }
}
