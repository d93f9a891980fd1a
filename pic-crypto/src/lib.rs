//! Hashing, signing and deterministic key derivation over raw bytes.
//!
//! This crate knows nothing about identifiers, tokens or key stores. It is kept
//! apart from the providers so the cryptographic primitives can be reviewed and
//! replaced on their own.

use std::sync::Arc;

use thiserror::Error;

pub mod imp;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CryptoProviderError {
    #[error("Missing hasher: `{0}`")]
    MissingHasher(String),
    #[error("Missing signer: `{0}`")]
    MissingSigner(String),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum HasherError {
    #[error("Could not hash")]
    CouldNotHash,
    #[error("Crypto provider error: `{0}`")]
    CryptoError(#[from] CryptoProviderError),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error("Crypto provider error: `{0}`")]
    CryptoError(#[from] CryptoProviderError),
    #[error("Could not sign: `{0}`")]
    CouldNotSign(String),
    #[error("Could not extract keypair")]
    CouldNotExtractKeyPair,
    #[error("Could not extract public key: `{0}`")]
    CouldNotExtractPublicKey(String),
    #[error("Could not verify: `{0}`")]
    CouldNotVerify(String),
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Missing algorithm `{0}`")]
    MissingAlgorithm(String),
    #[error("Missing key")]
    MissingKey,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyDerivationError {
    #[error("Seed is empty")]
    EmptySeed,
    #[error("Invalid modulus length: `{0}`")]
    InvalidModulusLength(usize),
    #[error("Could not derive key: `{0}`")]
    CouldNotDerive(String),
}

/// Provides hashing.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Hasher: Send + Sync {
    /// Hash and encode as base64url without padding.
    fn hash_base64(&self, input: &[u8]) -> Result<String, HasherError>;

    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, HasherError>;
}

/// Direct signing and verification of raw bytes.
///
/// Signing through a key store reference is done by the token signer in the
/// providers crate; this trait only sees key bytes.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Signer: Send + Sync {
    fn sign(
        &self,
        input: &[u8],
        public_key: &[u8],
        private_key: &[u8],
    ) -> Result<Vec<u8>, SignerError>;

    fn verify(&self, input: &[u8], signature: &[u8], public_key: &[u8]) -> Result<(), SignerError>;
}

/// Return hasher or signer instances by name.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait CryptoProvider: Send + Sync {
    fn get_hasher(&self, hasher: &str) -> Result<Arc<dyn Hasher>, CryptoProviderError>;

    fn get_signer(&self, signer: &str) -> Result<Arc<dyn Signer>, CryptoProviderError>;
}
