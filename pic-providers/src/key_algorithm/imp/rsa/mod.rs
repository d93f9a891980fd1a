use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};
use pic_crypto::imp::signer::rs256::RS256Signer;
use rand::thread_rng;

use crate::{
    common_models::{PublicKeyJwk, PublicKeyJwkRsaData},
    key_algorithm::{error::KeyAlgorithmError, model::GeneratedKey, KeyAlgorithm},
};

/// RSASSA-PKCS1-v1_5 keys. Key bytes are PKCS#1 DER.
pub struct Rsa {
    modulus_length: usize,
}

impl Rsa {
    pub fn new(modulus_length: usize) -> Self {
        Self { modulus_length }
    }
}

impl Default for Rsa {
    fn default() -> Self {
        Self::new(2048)
    }
}

impl KeyAlgorithm for Rsa {
    fn get_signer_algorithm_id(&self) -> String {
        "RS256".to_string()
    }

    fn get_jws_algorithm(&self) -> String {
        "RS256".to_string()
    }

    fn generate_key_pair(&self) -> Result<GeneratedKey, KeyAlgorithmError> {
        let (private, public) = RS256Signer::generate(&mut thread_rng(), self.modulus_length)
            .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?;

        Ok(GeneratedKey { public, private })
    }

    fn bytes_to_jwk(
        &self,
        bytes: &[u8],
        r#use: Option<String>,
    ) -> Result<PublicKeyJwk, KeyAlgorithmError> {
        let (n, e) = RS256Signer::public_key_components(bytes)?;

        Ok(PublicKeyJwk::Rsa(PublicKeyJwkRsaData {
            r#use,
            e: Base64UrlSafeNoPadding::encode_to_string(e)
                .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?,
            n: Base64UrlSafeNoPadding::encode_to_string(n)
                .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?,
        }))
    }

    fn jwk_to_bytes(&self, jwk: &PublicKeyJwk) -> Result<Vec<u8>, KeyAlgorithmError> {
        let PublicKeyJwk::Rsa(data) = jwk else {
            return Err(KeyAlgorithmError::InvalidKey("invalid kty".to_string()));
        };

        let n = Base64UrlSafeNoPadding::decode_to_vec(&data.n, None)
            .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?;
        let e = Base64UrlSafeNoPadding::decode_to_vec(&data.e, None)
            .map_err(|e| KeyAlgorithmError::InvalidKey(e.to_string()))?;

        Ok(RS256Signer::public_key_from_components(&n, &e)?)
    }
}
