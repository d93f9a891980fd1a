use serde::Deserialize;

/// Body returned by an issuer for an accepted issuance response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IssuanceServiceResponse {
    pub vc: String,
}
