//! Curve name compatibility between DID documents and the crypto engine.
//!
//! DID documents name secp256k1 `P-256K`; the crypto engine only recognizes
//! `K-256`. Both functions return a fresh copy and leave their input untouched,
//! so callers can still re-export the original name.

use super::model::CryptoAlgorithm;
use crate::common_models::PublicKeyJwk;

pub const CURVE_P256K: &str = "P-256K";
pub const CURVE_K256: &str = "K-256";

pub fn normalize_algorithm(algorithm: &CryptoAlgorithm) -> CryptoAlgorithm {
    let mut normalized = algorithm.clone();
    if normalized.named_curve.as_deref() == Some(CURVE_P256K) {
        normalized.named_curve = Some(CURVE_K256.to_string());
    }
    normalized
}

pub fn normalize_jwk(jwk: &PublicKeyJwk) -> PublicKeyJwk {
    let mut normalized = jwk.clone();
    if let PublicKeyJwk::Ec(data) | PublicKeyJwk::Okp(data) = &mut normalized {
        if data.crv == CURVE_P256K {
            data.crv = CURVE_K256.to_string();
        }
    }
    normalized
}
