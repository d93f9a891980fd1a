use std::sync::Arc;

use uuid::Uuid;

use super::{
    error::FormatterError,
    model::{VerifiablePresentationContent, VerifiablePresentationDescriptor},
    TokenLifetime,
};
use crate::{
    common_models::{card::VerifiableCredential, did::Identifier},
    exchange_protocol::{VERIFIABLE_PRESENTATION_TYPE, VP_CONTEXT_URL},
    token_signer::TokenSigner,
};

/// Wraps a single credential into a presentation signed by the holder.
pub struct VerifiablePresentationFormatter {
    signer: Arc<dyn TokenSigner>,
}

impl VerifiablePresentationFormatter {
    pub fn new(signer: Arc<dyn TokenSigner>) -> Self {
        Self { signer }
    }

    /// Relying parties accept one credential per presentation, so anything but a
    /// single element list is rejected. Callers present several credentials by
    /// calling this once per credential.
    pub async fn create_presentation(
        &self,
        credentials: &[VerifiableCredential],
        audience: &str,
        responder: &Identifier,
        expires_in_minutes: u32,
    ) -> Result<String, FormatterError> {
        let [credential] = credentials else {
            return Err(FormatterError::SingleCredentialRequired(credentials.len()));
        };

        self.sign_presentation(
            credential,
            audience,
            responder,
            TokenLifetime::starting_now(expires_in_minutes),
        )
        .await
    }

    pub(crate) async fn sign_presentation(
        &self,
        credential: &VerifiableCredential,
        audience: &str,
        responder: &Identifier,
        lifetime: TokenLifetime,
    ) -> Result<String, FormatterError> {
        let contents = VerifiablePresentationContent {
            jti: Uuid::new_v4().to_string(),
            vp: VerifiablePresentationDescriptor {
                verifiable_credential: vec![credential.raw.to_owned()],
                context: vec![VP_CONTEXT_URL.to_string()],
                r#type: vec![VERIFIABLE_PRESENTATION_TYPE.to_string()],
            },
            iss: responder.id.to_owned(),
            iat: lifetime.iat,
            nbf: lifetime.iat,
            exp: lifetime.exp,
            aud: audience.to_owned(),
        };

        let payload = serde_json::to_string(&contents)?;
        Ok(self
            .signer
            .sign_with_identifier(&payload, responder)
            .await?)
    }
}
