use rand::{CryptoRng, RngCore};
use rsa::{
    pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey},
    pkcs1v15::{Signature, SigningKey, VerifyingKey},
    signature::{SignatureEncoding, Signer as _, Verifier as _},
    traits::PublicKeyParts,
    BigUint, RsaPrivateKey, RsaPublicKey,
};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::{KeyDerivationError, Signer, SignerError};

const PUBLIC_EXPONENT: u32 = 65537;

/// RSASSA-PKCS1-v1_5 with SHA-256. Keys travel as PKCS#1 DER.
pub struct RS256Signer {}

impl RS256Signer {
    /// Generates a key pair from the given generator. With a seeded generator the
    /// result is fully determined by the seed.
    pub fn generate<R: RngCore + CryptoRng>(
        rng: &mut R,
        modulus_length: usize,
    ) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>), KeyDerivationError> {
        let exponent = BigUint::from(PUBLIC_EXPONENT);
        let private_key = RsaPrivateKey::new_with_exp(rng, modulus_length, &exponent)
            .map_err(|e| KeyDerivationError::CouldNotDerive(e.to_string()))?;

        let private_der = private_key
            .to_pkcs1_der()
            .map_err(|e| KeyDerivationError::CouldNotDerive(e.to_string()))?;
        let public_der = private_key
            .to_public_key()
            .to_pkcs1_der()
            .map_err(|e| KeyDerivationError::CouldNotDerive(e.to_string()))?;

        Ok((
            Zeroizing::new(private_der.as_bytes().to_vec()),
            public_der.as_bytes().to_vec(),
        ))
    }

    /// Big-endian modulus and exponent of a PKCS#1 public key.
    pub fn public_key_components(public_key: &[u8]) -> Result<(Vec<u8>, Vec<u8>), SignerError> {
        let public_key = RsaPublicKey::from_pkcs1_der(public_key)
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        Ok((public_key.n().to_bytes_be(), public_key.e().to_bytes_be()))
    }

    pub fn public_key_from_components(n: &[u8], e: &[u8]) -> Result<Vec<u8>, SignerError> {
        let public_key =
            RsaPublicKey::new(BigUint::from_bytes_be(n), BigUint::from_bytes_be(e))
                .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        let der = public_key
            .to_pkcs1_der()
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        Ok(der.as_bytes().to_vec())
    }
}

impl Signer for RS256Signer {
    fn sign(
        &self,
        input: &[u8],
        public_key: &[u8],
        private_key: &[u8],
    ) -> Result<Vec<u8>, SignerError> {
        let private_key = RsaPrivateKey::from_pkcs1_der(private_key)
            .map_err(|_| SignerError::CouldNotExtractKeyPair)?;
        let expected = RsaPublicKey::from_pkcs1_der(public_key)
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;

        if private_key.to_public_key() != expected {
            return Err(SignerError::CouldNotExtractKeyPair);
        }

        let signing_key = SigningKey::<Sha256>::new(private_key);
        let signature = signing_key
            .try_sign(input)
            .map_err(|e| SignerError::CouldNotSign(e.to_string()))?;
        Ok(signature.to_vec())
    }

    fn verify(&self, input: &[u8], signature: &[u8], public_key: &[u8]) -> Result<(), SignerError> {
        let public_key = RsaPublicKey::from_pkcs1_der(public_key)
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))?;
        let signature = Signature::try_from(signature).map_err(|_| SignerError::InvalidSignature)?;

        VerifyingKey::<Sha256>::new(public_key)
            .verify(input, &signature)
            .map_err(|_| SignerError::InvalidSignature)
    }
}
