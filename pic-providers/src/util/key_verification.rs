//! Verification of token signatures against keys published in identifier documents.

use std::sync::Arc;

use async_trait::async_trait;
use pic_crypto::SignerError;

use crate::{
    common_models::did::DidValue, did::resolver::Resolver, jose::jws::verifier::TokenVerifier,
    key_algorithm::provider::KeyAlgorithmProvider,
};

#[derive(Clone)]
pub struct KeyVerification {
    pub resolver: Arc<Resolver>,
    pub key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
}

#[async_trait]
impl TokenVerifier for KeyVerification {
    async fn verify<'a>(
        &self,
        issuer_did_value: Option<DidValue>,
        issuer_key_id: Option<&'a str>,
        algorithm: &'a str,
        token: &'a [u8],
        signature: &'a [u8],
    ) -> Result<(), SignerError> {
        let issuer =
            issuer_did_value.ok_or(SignerError::CouldNotVerify("Missing issuer".to_string()))?;
        let document = self
            .resolver
            .resolve(issuer.as_str())
            .await
            .map_err(|e| SignerError::CouldNotVerify(e.to_string()))?;

        let key = document
            .find_public_key(issuer_key_id)
            .ok_or(SignerError::MissingKey)?;
        let parsed = self
            .key_algorithm_provider
            .parse_jwk(&key.public_key_jwk)
            .map_err(|e| SignerError::CouldNotVerify(e.to_string()))?;

        let (name, key_algorithm) = self
            .key_algorithm_provider
            .get_key_algorithm_from_jws_alg(algorithm)
            .ok_or(SignerError::CouldNotVerify(format!(
                "Invalid algorithm: {algorithm}"
            )))?;
        if key_algorithm.get_signer_algorithm_id() != parsed.signer_algorithm_id {
            return Err(SignerError::CouldNotVerify(format!(
                "Key `{}` cannot verify {algorithm}",
                key.id
            )));
        }

        let signer = self
            .key_algorithm_provider
            .get_signer(&name)
            .map_err(|e| SignerError::CouldNotVerify(e.to_string()))?;

        signer.verify(token, signature, &parsed.public_key_bytes)
    }
}
