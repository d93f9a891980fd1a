//! Wire shapes shared by several providers.

use serde::{Deserialize, Serialize};

mod mapper;

/// A public JWK as it appears on the wire. Private members such as `d` are
/// dropped on deserialization.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kty")]
pub enum PublicKeyJwkDTO {
    #[serde(rename = "EC")]
    Ec {
        crv: String,
        x: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y: Option<String>,
        #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
        key_use: Option<String>,
    },
    #[serde(rename = "OKP")]
    Okp {
        crv: String,
        x: String,
        #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
        key_use: Option<String>,
    },
    #[serde(rename = "RSA")]
    Rsa {
        e: String,
        n: String,
        #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
        key_use: Option<String>,
    },
    #[serde(rename = "oct")]
    Oct {
        k: String,
        #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
        key_use: Option<String>,
    },
}
