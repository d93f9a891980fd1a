ecdsa_signer!(
    /// ECDSA over P-256 with SHA-256.
    ES256Signer,
    p256
);
