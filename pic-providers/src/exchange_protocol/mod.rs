//! Issuance and presentation exchanges: what was asked for and what the user
//! collected in reply.

pub mod error;
pub mod model;


/// Lifetime of signed responses unless configured otherwise.
pub const RESPONSE_EXPIRATION_IN_MINUTES: u32 = 5;

pub const VP_CONTEXT_URL: &str = "https://www.w3.org/2018/credentials/v1";
pub const VERIFIABLE_PRESENTATION_TYPE: &str = "VerifiablePresentation";

/// Audience of self-issued tokens.
pub const SELF_ISSUED: &str = "https://self-issued.me";
