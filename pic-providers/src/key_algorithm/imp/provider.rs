use std::{collections::HashMap, sync::Arc};

use pic_crypto::{CryptoProvider, Signer};

use crate::{
    common_models::PublicKeyJwk,
    key_algorithm::{
        error::KeyAlgorithmProviderError, model::ParsedPublicKeyJwk, normalize::normalize_jwk,
        provider::KeyAlgorithmProvider, KeyAlgorithm,
    },
};

pub struct KeyAlgorithmProviderImpl {
    algorithms: HashMap<String, Arc<dyn KeyAlgorithm>>,
    crypto: Arc<dyn CryptoProvider>,
}

impl KeyAlgorithmProviderImpl {
    pub fn new(
        algorithms: HashMap<String, Arc<dyn KeyAlgorithm>>,
        crypto: Arc<dyn CryptoProvider>,
    ) -> Self {
        Self { algorithms, crypto }
    }
}

impl KeyAlgorithmProvider for KeyAlgorithmProviderImpl {
    fn get_key_algorithm(&self, algorithm: &str) -> Option<Arc<dyn KeyAlgorithm>> {
        self.algorithms.get(algorithm).cloned()
    }

    fn get_signer(&self, algorithm: &str) -> Result<Arc<dyn Signer>, KeyAlgorithmProviderError> {
        let key_algorithm = self.get_key_algorithm(algorithm).ok_or(
            KeyAlgorithmProviderError::UnknownAlgorithm(algorithm.to_owned()),
        )?;
        let signer_algorithm = key_algorithm.get_signer_algorithm_id();
        self.crypto
            .get_signer(&signer_algorithm)
            .map_err(|e| KeyAlgorithmProviderError::UnknownSigner(e.to_string()))
    }

    fn get_key_algorithm_from_jws_alg(
        &self,
        jws_algorithm: &str,
    ) -> Option<(String, Arc<dyn KeyAlgorithm>)> {
        self.algorithms
            .iter()
            .find(|(_, algorithm)| algorithm.get_jws_algorithm() == jws_algorithm)
            .map(|(name, algorithm)| (name.to_owned(), algorithm.clone()))
    }

    fn parse_jwk(
        &self,
        key: &PublicKeyJwk,
    ) -> Result<ParsedPublicKeyJwk, KeyAlgorithmProviderError> {
        let key = normalize_jwk(key);

        for algorithm in self.algorithms.values() {
            if let Ok(public_key_bytes) = algorithm.jwk_to_bytes(&key) {
                return Ok(ParsedPublicKeyJwk {
                    public_key_bytes,
                    signer_algorithm_id: algorithm.get_signer_algorithm_id(),
                });
            }
        }

        Err(KeyAlgorithmProviderError::UnknownAlgorithm(format!(
            "no registered algorithm accepts the {} key",
            key.kty()
        )))
    }
}
