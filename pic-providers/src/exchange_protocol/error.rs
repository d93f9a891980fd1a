use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ExchangeProtocolError {
    #[error("Request names no requester: both `iss` and `client_id` are missing")]
    MissingRequester,
}
