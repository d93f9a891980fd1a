use std::{collections::BTreeMap, sync::Arc};

use futures::future::try_join_all;
use pic_crypto::CryptoProvider;
use uuid::Uuid;

use super::{
    error::{CryptoError, FormatterError},
    model::{AttestationResponse, OidcResponseContent},
    presentation::VerifiablePresentationFormatter,
    TokenLifetime,
};
use crate::{
    common_models::did::Identifier,
    exchange_protocol::model::{CollectedAttestations, Response},
    key_algorithm::{provider::KeyAlgorithmProvider, thumbprint::jwk_thumbprint},
    key_storage::KeyStore,
    token_signer::TokenSigner,
};

const THUMBPRINT_HASHER: &str = "sha-256";

/// Forms and signs self-issued responses.
pub struct OidcResponseFormatter {
    key_store: Arc<dyn KeyStore>,
    key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
    crypto: Arc<dyn CryptoProvider>,
    signer: Arc<dyn TokenSigner>,
    presentation_formatter: VerifiablePresentationFormatter,
}

impl OidcResponseFormatter {
    pub fn new(
        key_store: Arc<dyn KeyStore>,
        key_algorithm_provider: Arc<dyn KeyAlgorithmProvider>,
        crypto: Arc<dyn CryptoProvider>,
        signer: Arc<dyn TokenSigner>,
    ) -> Self {
        Self {
            key_store,
            key_algorithm_provider,
            crypto,
            presentation_formatter: VerifiablePresentationFormatter::new(signer.clone()),
            signer,
        }
    }

    /// Returns the compact signed response, or [`CryptoError`] wrapping whatever
    /// step failed. No partially formed token is ever returned.
    pub async fn form_and_sign_response(
        &self,
        response: &Response,
        responder: &Identifier,
        expires_in_minutes: u32,
    ) -> Result<String, CryptoError> {
        let result: Result<String, FormatterError> = async {
            let contents = self
                .form_contents(response, responder, expires_in_minutes)
                .await?;
            let payload = serde_json::to_string(&contents)?;
            Ok(self.signer.sign_with_identifier(&payload, responder).await?)
        }
        .await;

        result.map_err(|cause| {
            tracing::warn!(%cause, did = %responder.id, "unable to form response");
            CryptoError { cause }
        })
    }

    async fn form_contents(
        &self,
        response: &Response,
        responder: &Identifier,
        expires_in_minutes: u32,
    ) -> Result<OidcResponseContent, FormatterError> {
        let lifetime = TokenLifetime::starting_now(expires_in_minutes);

        // thumbprint and JWK come from the same key
        let key = self
            .key_store
            .get_public_key(&responder.signature_key_reference)?;
        let jwk = key.to_jwk(self.key_algorithm_provider.as_ref())?;
        let hasher = self
            .crypto
            .get_hasher(THUMBPRINT_HASHER)
            .map_err(|e| FormatterError::MissingHasher(e.to_string()))?;
        let sub = jwk_thumbprint(&jwk, hasher.as_ref())?;

        let (contract, nonce, state) = match response {
            Response::Issuance(issuance) => {
                (Some(issuance.request.contract_url.to_owned()), None, None)
            }
            Response::Presentation(presentation) => (
                None,
                presentation.request.content.nonce.to_owned(),
                presentation.request.content.state.to_owned(),
            ),
        };

        let attestations = self
            .create_attestations(
                response.collected(),
                response.presentation_audience(),
                responder,
                lifetime,
            )
            .await?;

        Ok(OidcResponseContent {
            sub,
            aud: response.audience().to_owned(),
            nonce,
            did: responder.id.to_owned(),
            sub_jwk: jwk.into(),
            iat: lifetime.iat,
            exp: lifetime.exp,
            state,
            jti: Uuid::new_v4().to_string(),
            contract,
            attestations,
        })
    }

    async fn create_attestations(
        &self,
        collected: &CollectedAttestations,
        audience: &str,
        responder: &Identifier,
        lifetime: TokenLifetime,
    ) -> Result<AttestationResponse, FormatterError> {
        let presentations = collected.cards.iter().map(|(card_type, card)| async move {
            let token = self
                .presentation_formatter
                .sign_presentation(&card.verifiable_credential, audience, responder, lifetime)
                .await?;
            Ok::<_, FormatterError>((card_type.to_owned(), token))
        });
        let presentations: BTreeMap<_, _> =
            try_join_all(presentations).await?.into_iter().collect();

        Ok(AttestationResponse {
            self_issued: non_empty(&collected.self_issued_claims),
            tokens: non_empty(&collected.id_tokens),
            presentations: (!presentations.is_empty()).then_some(presentations),
        })
    }
}

fn non_empty(map: &BTreeMap<String, String>) -> Option<BTreeMap<String, String>> {
    (!map.is_empty()).then(|| map.to_owned())
}
