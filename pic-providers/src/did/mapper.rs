use super::{
    dto::{IdentifierDocumentDTO, IdentifierDocumentPublicKeyDTO},
    model::{IdentifierDocument, IdentifierDocumentPublicKey},
};

impl From<IdentifierDocumentDTO> for IdentifierDocument {
    fn from(value: IdentifierDocumentDTO) -> Self {
        Self {
            id: value.id,
            context: value.context,
            public_keys: value
                .verification_method
                .into_iter()
                .map(Into::into)
                .collect(),
            services: value.service,
        }
    }
}

impl From<IdentifierDocumentPublicKeyDTO> for IdentifierDocumentPublicKey {
    fn from(value: IdentifierDocumentPublicKeyDTO) -> Self {
        Self {
            id: value.id,
            r#type: value.r#type,
            controller: value.controller,
            public_key_jwk: value.public_key_jwk.into(),
        }
    }
}
