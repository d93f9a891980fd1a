//! `struct`s for identifier documents.

use crate::common_models::{did::DidValue, PublicKeyJwk};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierDocument {
    pub id: DidValue,
    pub context: Option<serde_json::Value>,
    pub public_keys: Vec<IdentifierDocumentPublicKey>,
    pub services: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierDocumentPublicKey {
    /// Either a full `did#fragment` or a bare `#fragment`.
    pub id: String,
    pub r#type: String,
    pub controller: Option<String>,
    pub public_key_jwk: PublicKeyJwk,
}

impl IdentifierDocument {
    /// Key matching the fragment of `kid`, or the first key when no kid is given.
    pub fn find_public_key(&self, kid: Option<&str>) -> Option<&IdentifierDocumentPublicKey> {
        let Some(kid) = kid else {
            return self.public_keys.first();
        };

        let wanted = fragment(kid);
        self.public_keys
            .iter()
            .find(|key| key.id == kid || (wanted.is_some() && wanted == fragment(&key.id)))
    }
}

fn fragment(id: &str) -> Option<&str> {
    id.split_once('#').map(|(_, fragment)| fragment)
}
