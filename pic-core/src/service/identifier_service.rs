//! Creation of pairwise identifiers.

use std::sync::Arc;

use pic_crypto::CryptoProvider;
use pic_providers::{
    common_models::{did::Identifier, key::KeyReference},
    did::registrar::Registrar,
    key_algorithm::{
        model::CryptoAlgorithm, provider::KeyAlgorithmProvider, thumbprint::jwk_thumbprint,
    },
    key_storage::{imp::pairwise::PairwiseKeyDeriver, model::StoredKey, KeyStore},
};

use super::error::ServiceError;

pub struct IdentifierService {
    key_store: Arc<dyn KeyStore>,
    key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
    crypto: Arc<dyn CryptoProvider>,
    registrar: Arc<dyn Registrar>,
    deriver: PairwiseKeyDeriver,
    did_method: String,
    key_algorithm: CryptoAlgorithm,
}

impl IdentifierService {
    pub fn new(
        key_store: Arc<dyn KeyStore>,
        key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
        crypto: Arc<dyn CryptoProvider>,
        registrar: Arc<dyn Registrar>,
        did_method: impl Into<String>,
        key_algorithm: CryptoAlgorithm,
    ) -> Self {
        Self {
            deriver: PairwiseKeyDeriver::new(key_store.clone()),
            key_store,
            key_algorithm_provider,
            crypto,
            registrar,
            did_method: did_method.into(),
            key_algorithm,
        }
    }

    /// Derives the persona's key for `peer_id`, stores it and registers the
    /// identifier. Calling this again for the same pair yields the same key.
    ///
    /// The same key is referenced for signing, encryption and recovery.
    pub async fn create_pairwise_identifier(
        &self,
        seed_reference: &KeyReference,
        persona_id: &str,
        peer_id: &str,
    ) -> Result<Identifier, ServiceError> {
        let key = self
            .deriver
            .derive(&self.key_algorithm, seed_reference, persona_id, peer_id)?;

        let jwk = key.to_public().to_jwk(self.key_algorithm_provider.as_ref())?;
        let hasher = self
            .crypto
            .get_hasher("sha-256")
            .map_err(|e| ServiceError::MappingError(e.to_string()))?;
        let thumbprint = jwk_thumbprint(&jwk, hasher.as_ref())?;

        let reference = KeyReference::from(format!("{persona_id}.{thumbprint}"));
        self.key_store.save(&reference, StoredKey::KeyPair(key))?;

        let identifier = Identifier {
            id: format!("did:{}:{thumbprint}", self.did_method).into(),
            alias: persona_id.to_owned(),
            signature_key_reference: reference.to_owned(),
            encryption_key_reference: reference.to_owned(),
            recovery_key_reference: reference,
        };

        match self.registrar.register(identifier).await {
            Ok(registered) => {
                tracing::debug!(did = %registered.id, "registered pairwise identifier");
                Ok(registered)
            }
            Err(error) => {
                tracing::warn!(%error, "pairwise identifier registration failed");
                Err(error.into())
            }
        }
    }
}
