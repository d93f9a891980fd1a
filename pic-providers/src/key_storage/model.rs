//! `struct`s and `enum`s for key storage.

use std::fmt;

use zeroize::Zeroizing;

use super::error::KeyStoreError;
use crate::{
    common_models::PublicKeyJwk,
    key_algorithm::{model::KeyAlgorithmType, provider::KeyAlgorithmProvider},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub kid: String,
    pub key_type: KeyAlgorithmType,
    pub public_key: Vec<u8>,
}

impl PublicKey {
    /// Public JWK export. Private members are never part of it.
    pub fn to_jwk(
        &self,
        key_algorithm_provider: &dyn KeyAlgorithmProvider,
    ) -> Result<PublicKeyJwk, KeyStoreError> {
        let algorithm = self.key_type.to_string();
        let key_algorithm = key_algorithm_provider
            .get_key_algorithm(&algorithm)
            .ok_or(KeyStoreError::MissingKeyAlgorithm(algorithm))?;

        Ok(key_algorithm.bytes_to_jwk(&self.public_key, Some("sig".to_string()))?)
    }
}

#[derive(Clone)]
pub struct PrivateKey {
    pub kid: String,
    pub key_type: KeyAlgorithmType,
    pub public_key: Vec<u8>,
    pub private_key: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    pub fn to_public(&self) -> PublicKey {
        PublicKey {
            kid: self.kid.to_owned(),
            key_type: self.key_type,
            public_key: self.public_key.to_owned(),
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("kid", &self.kid)
            .field("key_type", &self.key_type)
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct SecretKey {
    pub kid: String,
    pub value: Zeroizing<Vec<u8>>,
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("kid", &self.kid)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub enum StoredKey {
    KeyPair(PrivateKey),
    Secret(SecretKey),
}
