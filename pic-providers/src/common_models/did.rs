use serde::{Deserialize, Serialize};

use crate::common_models::{key::KeyReference, macros::string_newtype};

string_newtype!(
    /// A decentralized identifier, e.g. `did:ion:EiA...`.
    DidValue
);

/// An identifier owned by this application.
///
/// The DID itself plus references to its keys in the key store. Signing never
/// mutates an identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub id: DidValue,
    pub alias: String,
    pub signature_key_reference: KeyReference,
    pub encryption_key_reference: KeyReference,
    pub recovery_key_reference: KeyReference,
}
