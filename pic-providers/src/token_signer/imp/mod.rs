use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    common_models::did::Identifier,
    jose::jws::{JwsFormat, JwsHeader, JwsToken},
    key_algorithm::{error::KeyAlgorithmProviderError, provider::KeyAlgorithmProvider},
    key_storage::KeyStore,
    token_signer::{error::TokenSignerError, TokenSigner},
};


/// Signs with the private key held under the identifier's signature key reference.
pub struct KeyStoreTokenSigner {
    key_store: Arc<dyn KeyStore>,
    key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
}

impl KeyStoreTokenSigner {
    pub fn new(
        key_store: Arc<dyn KeyStore>,
        key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
    ) -> Self {
        Self {
            key_store,
            key_algorithm_provider,
        }
    }
}

#[async_trait]
impl TokenSigner for KeyStoreTokenSigner {
    async fn sign_with_identifier(
        &self,
        payload: &str,
        identifier: &Identifier,
    ) -> Result<String, TokenSignerError> {
        let key = self
            .key_store
            .get_private_key(&identifier.signature_key_reference)?;

        let algorithm = key.key_type.to_string();
        let key_algorithm = self
            .key_algorithm_provider
            .get_key_algorithm(&algorithm)
            .ok_or(KeyAlgorithmProviderError::UnknownAlgorithm(
                algorithm.to_owned(),
            ))?;
        let signer = self.key_algorithm_provider.get_signer(&algorithm)?;

        let header = JwsHeader {
            alg: key_algorithm.get_jws_algorithm(),
            kid: Some(format!("{}#{}", identifier.id, key.kid)),
            typ: Some("JWT".to_string()),
        };

        let mut token = JwsToken::new(payload.as_bytes())?;
        token.sign(&header, None, |input| {
            signer.sign(input, &key.public_key, &key.private_key)
        })?;

        Ok(token.serialize(JwsFormat::Compact)?)
    }
}
