/// ECDSA signer over a RustCrypto curve crate. Public keys are accepted in any
/// SEC1 form and produced compressed, signatures are raw `r || s`.
macro_rules! ecdsa_signer {
    ($(#[$meta:meta])* $name:ident, $curve:ident) => {
        use $curve::ecdsa::{
            signature::{Signer as _, Verifier as _},
            Signature, SigningKey, VerifyingKey,
        };
        use rand::thread_rng;

        use crate::{Signer, SignerError};

        $(#[$meta])*
        pub struct $name {}

        impl $name {
            fn verifying_key(public_key: &[u8]) -> Result<VerifyingKey, SignerError> {
                VerifyingKey::from_sec1_bytes(public_key)
                    .map_err(|err| SignerError::CouldNotExtractPublicKey(err.to_string()))
            }

            fn compressed(key: &VerifyingKey) -> Vec<u8> {
                key.to_encoded_point(true).as_bytes().to_vec()
            }

            /// Compressed SEC1 form of any SEC1 encoded public key.
            pub fn to_bytes(public_key: &[u8]) -> Result<Vec<u8>, SignerError> {
                Self::verifying_key(public_key).map(|key| Self::compressed(&key))
            }

            /// Compressed public key for a secret scalar. Fails for zero or
            /// out of range scalars.
            pub fn public_key_from_private(private_key: &[u8]) -> Result<Vec<u8>, SignerError> {
                let secret = SigningKey::from_slice(private_key)
                    .map_err(|_| SignerError::CouldNotExtractKeyPair)?;
                Ok(Self::compressed(secret.verifying_key()))
            }

            pub fn random() -> (Vec<u8>, Vec<u8>) {
                let secret = SigningKey::random(&mut thread_rng());
                let public = Self::compressed(secret.verifying_key());
                (secret.to_bytes().to_vec(), public)
            }
        }

        impl Signer for $name {
            fn sign(
                &self,
                input: &[u8],
                public_key: &[u8],
                private_key: &[u8],
            ) -> Result<Vec<u8>, SignerError> {
                let secret = SigningKey::from_slice(private_key)
                    .map_err(|err| SignerError::CouldNotSign(err.to_string()))?;
                if *secret.verifying_key() != Self::verifying_key(public_key)? {
                    return Err(SignerError::CouldNotExtractKeyPair);
                }

                let signature: Signature = secret.sign(input);
                Ok(signature.to_bytes().to_vec())
            }

            fn verify(
                &self,
                input: &[u8],
                signature: &[u8],
                public_key: &[u8],
            ) -> Result<(), SignerError> {
                let key = Self::verifying_key(public_key)?;
                let signature =
                    Signature::from_slice(signature).map_err(|_| SignerError::InvalidSignature)?;
                key.verify(input, &signature)
                    .map_err(|err| SignerError::CouldNotVerify(err.to_string()))
            }
        }
    };
}

pub mod eddsa;
pub mod es256;
pub mod es256k;
pub mod rs256;
