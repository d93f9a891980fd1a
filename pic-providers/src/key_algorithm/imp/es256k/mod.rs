use k256::elliptic_curve::sec1::ToEncodedPoint;
use pic_crypto::imp::signer::es256k::ES256KSigner;
use zeroize::Zeroizing;

use super::elliptic::{jwk_from_coordinates, sec1_from_jwk};
use crate::{
    common_models::PublicKeyJwk,
    key_algorithm::{
        error::KeyAlgorithmError, model::GeneratedKey, normalize::CURVE_K256, KeyAlgorithm,
    },
};

/// ECDSA over secp256k1.
///
/// Exported keys name the curve `secp256k1`; imported keys may also use `K-256`,
/// which is what DID documents carry once normalized.
pub struct Es256k;

const CURVE_SECP256K1: &str = "secp256k1";

impl KeyAlgorithm for Es256k {
    fn get_signer_algorithm_id(&self) -> String {
        "ES256K".to_string()
    }

    fn get_jws_algorithm(&self) -> String {
        "ES256K".to_string()
    }

    fn generate_key_pair(&self) -> Result<GeneratedKey, KeyAlgorithmError> {
        let (private, public) = ES256KSigner::random();

        Ok(GeneratedKey {
            public,
            private: Zeroizing::new(private),
        })
    }

    fn bytes_to_jwk(
        &self,
        bytes: &[u8],
        r#use: Option<String>,
    ) -> Result<PublicKeyJwk, KeyAlgorithmError> {
        let pk = k256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?;
        let encoded_point = pk.to_encoded_point(false);
        let x = encoded_point
            .x()
            .ok_or(KeyAlgorithmError::InvalidKey("X is missing".to_string()))?;
        let y = encoded_point
            .y()
            .ok_or(KeyAlgorithmError::InvalidKey("Y is missing".to_string()))?;

        jwk_from_coordinates(CURVE_SECP256K1, x, y, r#use)
    }

    fn jwk_to_bytes(&self, jwk: &PublicKeyJwk) -> Result<Vec<u8>, KeyAlgorithmError> {
        let uncompressed = sec1_from_jwk(jwk, &[CURVE_SECP256K1, CURVE_K256])?;
        Ok(ES256KSigner::to_bytes(&uncompressed)?)
    }
}
