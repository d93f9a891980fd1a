use ed25519_compact::{KeyPair, PublicKey, Seed, Signature};

use crate::{Signer, SignerError};

/// Ed25519. Private keys are the 64 byte expanded form (seed followed by public key).
pub struct EDDSASigner {}

impl EDDSASigner {
    /// Expands a 32 byte seed into the 64 byte ed25519 secret key and its public key.
    pub fn from_seed(seed: &[u8]) -> Result<(Vec<u8>, Vec<u8>), SignerError> {
        let seed = Seed::from_slice(seed).map_err(|_| SignerError::CouldNotExtractKeyPair)?;
        Ok(split(KeyPair::from_seed(seed)))
    }

    pub fn random() -> (Vec<u8>, Vec<u8>) {
        split(KeyPair::generate())
    }
}

fn split(key_pair: KeyPair) -> (Vec<u8>, Vec<u8>) {
    (key_pair.sk.to_vec(), key_pair.pk.to_vec())
}

impl Signer for EDDSASigner {
    fn sign(
        &self,
        input: &[u8],
        public_key: &[u8],
        private_key: &[u8],
    ) -> Result<Vec<u8>, SignerError> {
        let key_pair =
            KeyPair::from_slice(private_key).map_err(|_| SignerError::CouldNotExtractKeyPair)?;
        if key_pair.pk.as_slice() != public_key {
            return Err(SignerError::CouldNotExtractKeyPair);
        }

        Ok(key_pair.sk.sign(input, None).to_vec())
    }

    fn verify(&self, input: &[u8], signature: &[u8], public_key: &[u8]) -> Result<(), SignerError> {
        let key = PublicKey::from_slice(public_key)
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        let signature =
            Signature::from_slice(signature).map_err(|_| SignerError::InvalidSignature)?;

        key.verify(input, &signature)
            .map_err(|_| SignerError::InvalidSignature)
    }
}
