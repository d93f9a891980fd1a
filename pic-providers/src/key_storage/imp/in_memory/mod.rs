//! Process-local key store.

use std::{collections::HashMap, sync::RwLock};

use crate::{
    common_models::key::KeyReference,
    key_storage::{
        error::KeyStoreError,
        model::{PrivateKey, PublicKey, SecretKey, StoredKey},
        KeyStore,
    },
};


#[derive(Default)]
pub struct InMemoryKeyStore {
    keys: RwLock<HashMap<KeyReference, StoredKey>>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, reference: &KeyReference) -> Result<StoredKey, KeyStoreError> {
        self.keys
            .read()
            .map_err(|e| KeyStoreError::Unavailable(e.to_string()))?
            .get(reference)
            .cloned()
            .ok_or_else(|| KeyStoreError::NotFound(reference.to_string()))
    }
}

impl KeyStore for InMemoryKeyStore {
    fn get_public_key(&self, reference: &KeyReference) -> Result<PublicKey, KeyStoreError> {
        self.get_private_key(reference).map(|key| key.to_public())
    }

    fn get_private_key(&self, reference: &KeyReference) -> Result<PrivateKey, KeyStoreError> {
        match self.get(reference)? {
            StoredKey::KeyPair(key) => Ok(key),
            StoredKey::Secret(_) => Err(KeyStoreError::WrongKeyKind {
                reference: reference.to_string(),
                expected: "key pair",
            }),
        }
    }

    fn get_secret(&self, reference: &KeyReference) -> Result<SecretKey, KeyStoreError> {
        match self.get(reference)? {
            StoredKey::Secret(key) => Ok(key),
            StoredKey::KeyPair(_) => Err(KeyStoreError::WrongKeyKind {
                reference: reference.to_string(),
                expected: "secret",
            }),
        }
    }

    fn save(&self, reference: &KeyReference, key: StoredKey) -> Result<(), KeyStoreError> {
        self.keys
            .write()
            .map_err(|e| KeyStoreError::Unavailable(e.to_string()))?
            .insert(reference.to_owned(), key);
        Ok(())
    }

    fn list(&self) -> Result<Vec<KeyReference>, KeyStoreError> {
        let mut references: Vec<_> = self
            .keys
            .read()
            .map_err(|e| KeyStoreError::Unavailable(e.to_string()))?
            .keys()
            .cloned()
            .collect();
        references.sort();
        Ok(references)
    }
}
