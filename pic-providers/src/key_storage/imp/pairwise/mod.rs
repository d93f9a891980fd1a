//! Pairwise key derivation through the key store.
//!
//! The seed secret never leaves the key store module; callers only name it by
//! reference. The derived key is returned to the caller, who decides whether to
//! store it.

use std::sync::Arc;

use pic_crypto::imp::pairwise::{derive_key_pair, derive_pairwise_seed, EcCurve, PairwiseTarget};

use crate::{
    common_models::key::KeyReference,
    key_algorithm::{
        model::{CryptoAlgorithm, KeyAlgorithmType},
        normalize::{normalize_algorithm, CURVE_K256},
    },
    key_storage::{
        error::{KeyDerivationError, KeyStoreError},
        model::PrivateKey,
        KeyStore,
    },
};


/// Key id given to every derived key pair.
pub const PAIRWISE_KEY_ID: &str = "sign";

pub struct PairwiseKeyDeriver {
    key_store: Arc<dyn KeyStore>,
}

impl PairwiseKeyDeriver {
    pub fn new(key_store: Arc<dyn KeyStore>) -> Self {
        Self { key_store }
    }

    /// Derives the key pair for `(seed, persona_id, peer_id)`.
    ///
    /// `algorithm` takes the same parameters as ordinary key generation. The
    /// output is a pure function of the seed secret and both ids.
    pub fn derive(
        &self,
        algorithm: &CryptoAlgorithm,
        seed_reference: &KeyReference,
        persona_id: &str,
        peer_id: &str,
    ) -> Result<PrivateKey, KeyDerivationError> {
        let (target, key_type) = pairwise_target(&normalize_algorithm(algorithm))?;

        let seed = self
            .key_store
            .get_secret(seed_reference)
            .map_err(|error| match error {
                KeyStoreError::NotFound(_) | KeyStoreError::WrongKeyKind { .. } => {
                    KeyDerivationError::UnusableSeed(seed_reference.to_string())
                }
                other => KeyDerivationError::KeyStore(other),
            })?;

        let pairwise_seed = derive_pairwise_seed(&seed.value, persona_id, peer_id)?;
        let key_pair = derive_key_pair(target, &pairwise_seed)?;

        tracing::debug!(%key_type, "derived pairwise key");

        Ok(PrivateKey {
            kid: PAIRWISE_KEY_ID.to_string(),
            key_type,
            public_key: key_pair.public,
            private_key: key_pair.private,
        })
    }
}

/// Maps normalized generation parameters onto a derivation target.
fn pairwise_target(
    algorithm: &CryptoAlgorithm,
) -> Result<(PairwiseTarget, KeyAlgorithmType), KeyDerivationError> {
    let unsupported = || KeyDerivationError::UnsupportedAlgorithm(algorithm.name.to_owned());

    match algorithm.name.as_str() {
        "ECDSA" | "ECDH" => match algorithm.named_curve.as_deref() {
            Some("P-256") => Ok((PairwiseTarget::Ec(EcCurve::P256), KeyAlgorithmType::Es256)),
            Some(CURVE_K256) | Some("secp256k1") => Ok((
                PairwiseTarget::Ec(EcCurve::Secp256k1),
                KeyAlgorithmType::Es256k,
            )),
            Some(curve) => Err(KeyDerivationError::UnsupportedAlgorithm(curve.to_owned())),
            None => Err(unsupported()),
        },
        "EdDSA" | "Ed25519" => Ok((PairwiseTarget::Ed25519, KeyAlgorithmType::Eddsa)),
        "RSASSA-PKCS1-v1_5" | "RSA-PSS" | "RSA-OAEP" => {
            let modulus_length = algorithm.modulus_length.ok_or_else(unsupported)?;
            Ok((
                PairwiseTarget::Rsa { modulus_length },
                KeyAlgorithmType::Rs256,
            ))
        }
        _ => Err(unsupported()),
    }
}
