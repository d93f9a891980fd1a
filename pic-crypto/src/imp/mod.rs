use std::{collections::HashMap, sync::Arc};

use hmac::Hmac;
use sha2::{Sha256, Sha512};

use super::{CryptoProvider, CryptoProviderError, Hasher, Signer};

pub mod hasher;
pub mod pairwise;
pub mod signer;
pub mod utilities;

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;


/// Hashers and signers registered by name, e.g. `sha-256` or `ES256K`.
#[derive(Clone, Default)]
pub struct CryptoProviderImpl {
    hashers: HashMap<String, Arc<dyn Hasher>>,
    signers: HashMap<String, Arc<dyn Signer>>,
}

impl CryptoProviderImpl {
    pub fn new(
        hashers: HashMap<String, Arc<dyn Hasher>>,
        signers: HashMap<String, Arc<dyn Signer>>,
    ) -> Self {
        Self { hashers, signers }
    }
}

impl CryptoProvider for CryptoProviderImpl {
    fn get_hasher(&self, name: &str) -> Result<Arc<dyn Hasher>, CryptoProviderError> {
        self.hashers
            .get(name)
            .cloned()
            .ok_or_else(|| CryptoProviderError::MissingHasher(name.to_owned()))
    }

    fn get_signer(&self, name: &str) -> Result<Arc<dyn Signer>, CryptoProviderError> {
        self.signers
            .get(name)
            .cloned()
            .ok_or_else(|| CryptoProviderError::MissingSigner(name.to_owned()))
    }
}
