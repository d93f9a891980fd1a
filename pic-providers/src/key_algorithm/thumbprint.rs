//! RFC 7638 JWK thumbprints.

use std::collections::BTreeMap;

use pic_crypto::Hasher;

use super::error::KeyAlgorithmError;
use crate::common_models::PublicKeyJwk;

/// Canonical JSON of the required members, in lexicographic order, no whitespace.
pub fn canonical_jwk(jwk: &PublicKeyJwk) -> Result<String, KeyAlgorithmError> {
    let mut members = BTreeMap::from([("kty", jwk.kty())]);
    match jwk {
        PublicKeyJwk::Ec(data) => {
            let y = data
                .y
                .as_deref()
                .ok_or(KeyAlgorithmError::InvalidKey("Y is missing".to_string()))?;
            members.extend([("crv", data.crv.as_str()), ("x", data.x.as_str()), ("y", y)]);
        }
        PublicKeyJwk::Okp(data) => {
            members.extend([("crv", data.crv.as_str()), ("x", data.x.as_str())]);
        }
        PublicKeyJwk::Rsa(data) => {
            members.extend([("e", data.e.as_str()), ("n", data.n.as_str())]);
        }
        PublicKeyJwk::Oct(data) => {
            members.insert("k", data.k.as_str());
        }
    }

    serde_json::to_string(&members).map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))
}

/// Base64url thumbprint using the given hasher, normally SHA-256.
pub fn jwk_thumbprint(jwk: &PublicKeyJwk, hasher: &dyn Hasher) -> Result<String, KeyAlgorithmError> {
    let canonical = canonical_jwk(jwk)?;
    Ok(hasher.hash_base64(canonical.as_bytes())?)
}
