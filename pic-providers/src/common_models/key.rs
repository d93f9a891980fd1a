use crate::common_models::macros::string_newtype;

string_newtype!(
    /// Name under which a key pair is held in the key store.
    KeyReference
);
