//! Key algorithm provider.

use std::sync::Arc;

use pic_crypto::Signer;

use super::{error::KeyAlgorithmProviderError, model::ParsedPublicKeyJwk, KeyAlgorithm};
use crate::common_models::PublicKeyJwk;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait KeyAlgorithmProvider: Send + Sync {
    fn get_key_algorithm(&self, algorithm: &str) -> Option<Arc<dyn KeyAlgorithm>>;

    fn get_signer(&self, algorithm: &str) -> Result<Arc<dyn Signer>, KeyAlgorithmProviderError>;

    /// Algorithm name and implementation for a JWS `alg` header value.
    fn get_key_algorithm_from_jws_alg(
        &self,
        jws_algorithm: &str,
    ) -> Option<(String, Arc<dyn KeyAlgorithm>)>;

    /// Finds the algorithm able to read the key. Curve names are normalized first.
    fn parse_jwk(&self, key: &PublicKeyJwk)
        -> Result<ParsedPublicKeyJwk, KeyAlgorithmProviderError>;
}
