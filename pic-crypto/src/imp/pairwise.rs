//! Deterministic pairwise key derivation.
//!
//! A pairwise key is a function of a seed secret, a persona id and a peer id only.
//! No entropy source is consulted: the same three inputs give the same key pair
//! on every call and in every process, while a different peer id gives a key
//! that cannot be linked to the first without the seed.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::{
    signer::{eddsa::EDDSASigner, es256::ES256Signer, es256k::ES256KSigner, rs256::RS256Signer},
    utilities::{create_hmac, create_hmac_sha512},
};
use crate::KeyDerivationError;

/// Upper bound of candidates tried before giving up on an EC scalar. A HMAC output
/// is out of range with negligible probability, so this is never reached in practice.
const MAX_SCALAR_CANDIDATES: u32 = 16;

const MIN_MODULUS_LENGTH: usize = 1024;
const MAX_MODULUS_LENGTH: usize = 8192;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EcCurve {
    P256,
    Secp256k1,
}

/// Shape of the key pair to derive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairwiseTarget {
    Ec(EcCurve),
    Ed25519,
    Rsa { modulus_length: usize },
}

/// Raw key material. EC keys are a 32 byte scalar and a compressed SEC1 point,
/// Ed25519 keys are the 64 byte secret and 32 byte public key, RSA keys are PKCS#1 DER.
pub struct DerivedKeyPair {
    pub private: Zeroizing<Vec<u8>>,
    pub public: Vec<u8>,
}

/// `HMAC-SHA512(seed, persona_id)` followed by `HMAC-SHA512(persona master key, peer_id)`.
pub fn derive_pairwise_seed(
    seed: &[u8],
    persona_id: &str,
    peer_id: &str,
) -> Result<Zeroizing<Vec<u8>>, KeyDerivationError> {
    if seed.is_empty() {
        return Err(KeyDerivationError::EmptySeed);
    }

    let persona_master_key = create_hmac_sha512(seed, persona_id.as_bytes())
        .map(Zeroizing::new)
        .ok_or(KeyDerivationError::CouldNotDerive(
            "persona master key".to_string(),
        ))?;

    create_hmac_sha512(&persona_master_key, peer_id.as_bytes())
        .map(Zeroizing::new)
        .ok_or(KeyDerivationError::CouldNotDerive("pairwise seed".to_string()))
}

pub fn derive_key_pair(
    target: PairwiseTarget,
    pairwise_seed: &[u8],
) -> Result<DerivedKeyPair, KeyDerivationError> {
    match target {
        PairwiseTarget::Ec(curve) => derive_ec(curve, pairwise_seed),
        PairwiseTarget::Ed25519 => {
            let seed = pairwise_seed
                .get(..32)
                .ok_or(KeyDerivationError::CouldNotDerive("seed too short".to_string()))?;
            let (private, public) = EDDSASigner::from_seed(seed)
                .map_err(|e| KeyDerivationError::CouldNotDerive(e.to_string()))?;
            Ok(DerivedKeyPair {
                private: Zeroizing::new(private),
                public,
            })
        }
        PairwiseTarget::Rsa { modulus_length } => {
            if !(MIN_MODULUS_LENGTH..=MAX_MODULUS_LENGTH).contains(&modulus_length)
                || modulus_length % 8 != 0
            {
                return Err(KeyDerivationError::InvalidModulusLength(modulus_length));
            }

            let mut rng = ChaCha20Rng::from_seed(Sha256::digest(pairwise_seed).into());
            let (private, public) = RS256Signer::generate(&mut rng, modulus_length)?;
            Ok(DerivedKeyPair { private, public })
        }
    }
}

fn derive_ec(curve: EcCurve, pairwise_seed: &[u8]) -> Result<DerivedKeyPair, KeyDerivationError> {
    for counter in 0..MAX_SCALAR_CANDIDATES {
        let candidate = create_hmac(pairwise_seed, &counter.to_be_bytes())
            .map(Zeroizing::new)
            .ok_or(KeyDerivationError::CouldNotDerive("scalar".to_string()))?;

        let public = match curve {
            EcCurve::P256 => ES256Signer::public_key_from_private(&candidate),
            EcCurve::Secp256k1 => ES256KSigner::public_key_from_private(&candidate),
        };

        // zero or >= curve order
        if let Ok(public) = public {
            return Ok(DerivedKeyPair {
                private: candidate,
                public,
            });
        }
    }

    Err(KeyDerivationError::CouldNotDerive(
        "no valid scalar".to_string(),
    ))
}
