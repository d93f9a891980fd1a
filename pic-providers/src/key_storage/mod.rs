//! Key store contract and implementations.
//!
//! A key store maps a [`KeyReference`] to key material. Signing and response
//! formatting only ever read from it.

use crate::common_models::key::KeyReference;

use error::KeyStoreError;
use model::{PrivateKey, PublicKey, SecretKey, StoredKey};

pub mod error;
pub mod imp;
pub mod model;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait KeyStore: Send + Sync {
    /// Public half of the key pair held under `reference`.
    fn get_public_key(&self, reference: &KeyReference) -> Result<PublicKey, KeyStoreError>;

    /// Full key pair held under `reference`.
    fn get_private_key(&self, reference: &KeyReference) -> Result<PrivateKey, KeyStoreError>;

    /// Symmetric secret held under `reference`, e.g. a derivation seed.
    fn get_secret(&self, reference: &KeyReference) -> Result<SecretKey, KeyStoreError>;

    /// Stores `key`, replacing anything previously held under `reference`.
    fn save(&self, reference: &KeyReference, key: StoredKey) -> Result<(), KeyStoreError>;

    fn list(&self) -> Result<Vec<KeyReference>, KeyStoreError>;
}
