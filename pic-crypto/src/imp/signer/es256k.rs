ecdsa_signer!(
    /// ECDSA over secp256k1 with SHA-256. Produced signatures are low-S.
    ES256KSigner,
    k256
);
