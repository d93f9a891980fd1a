use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};
use ed25519_compact::{KeyPair, PublicKey};
use zeroize::Zeroizing;

use crate::{
    common_models::{PublicKeyJwk, PublicKeyJwkEllipticData},
    key_algorithm::{error::KeyAlgorithmError, model::GeneratedKey, KeyAlgorithm},
};

pub struct Eddsa;

impl KeyAlgorithm for Eddsa {
    fn get_signer_algorithm_id(&self) -> String {
        "Ed25519".to_string()
    }

    fn get_jws_algorithm(&self) -> String {
        "EdDSA".to_string()
    }

    fn generate_key_pair(&self) -> Result<GeneratedKey, KeyAlgorithmError> {
        let key_pair = KeyPair::generate();

        Ok(GeneratedKey {
            public: key_pair.pk.to_vec(),
            private: Zeroizing::new(key_pair.sk.to_vec()),
        })
    }

    fn bytes_to_jwk(
        &self,
        bytes: &[u8],
        r#use: Option<String>,
    ) -> Result<PublicKeyJwk, KeyAlgorithmError> {
        PublicKey::from_slice(bytes).map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?;

        Ok(PublicKeyJwk::Okp(PublicKeyJwkEllipticData {
            r#use,
            crv: "Ed25519".to_string(),
            x: Base64UrlSafeNoPadding::encode_to_string(bytes)
                .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?,
            y: None,
        }))
    }

    fn jwk_to_bytes(&self, jwk: &PublicKeyJwk) -> Result<Vec<u8>, KeyAlgorithmError> {
        let PublicKeyJwk::Okp(data) = jwk else {
            return Err(KeyAlgorithmError::InvalidKey("invalid kty".to_string()));
        };
        if data.crv != "Ed25519" {
            return Err(KeyAlgorithmError::UnsupportedCurve(data.crv.to_owned()));
        }

        let x = Base64UrlSafeNoPadding::decode_to_vec(&data.x, None)
            .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?;
        PublicKey::from_slice(&x).map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?;

        Ok(x)
    }
}
