//! Key algorithm representations.
//!
//! Converts public keys between raw bytes and JWK, names the signer for each
//! algorithm and normalizes curve names coming from the DID ecosystem before
//! keys are handed to the crypto engine.

use error::KeyAlgorithmError;
use model::GeneratedKey;

use crate::common_models::PublicKeyJwk;

pub mod error;
pub mod imp;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod thumbprint;

/// Find signer IDs and convert key representations.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait KeyAlgorithm: Send + Sync {
    /// Finds related crypto signer ID.
    fn get_signer_algorithm_id(&self) -> String;

    /// The `alg` value written into JWS headers.
    fn get_jws_algorithm(&self) -> String;

    /// Generates a new in-memory key-pair.
    fn generate_key_pair(&self) -> Result<GeneratedKey, KeyAlgorithmError>;

    /// Converts public key bytes to JWK.
    fn bytes_to_jwk(
        &self,
        bytes: &[u8],
        r#use: Option<String>,
    ) -> Result<PublicKeyJwk, KeyAlgorithmError>;

    /// Converts JWK to key bytes. Curve names are expected in normalized form.
    fn jwk_to_bytes(&self, jwk: &PublicKeyJwk) -> Result<Vec<u8>, KeyAlgorithmError>;
}
