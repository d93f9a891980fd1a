//! Assembly and signing of self-issued responses and verifiable presentations.
//!
//! A response groups what the user collected by attestation kind. Every card
//! becomes its own signed presentation; the response itself is then signed as
//! a whole. Both tokens are signed with the responder's identifier key.

use time::OffsetDateTime;

pub mod error;
pub mod model;
pub mod oidc;
pub mod presentation;

#[cfg(test)]
mod test;

/// One clock sample shared by every token formed in a single call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenLifetime {
    pub iat: i64,
    pub exp: i64,
}

impl TokenLifetime {
    pub fn starting_at(now: OffsetDateTime, expires_in_minutes: u32) -> Self {
        // whole seconds, rounded down
        let iat = now.unix_timestamp();
        Self {
            iat,
            exp: iat + i64::from(expires_in_minutes) * 60,
        }
    }

    pub fn starting_now(expires_in_minutes: u32) -> Self {
        Self::starting_at(OffsetDateTime::now_utc(), expires_in_minutes)
    }
}
