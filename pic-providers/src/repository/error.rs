use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Network error: `{0}`")]
    Network(String),
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16, body: String },
    #[error("Invalid response from {url}: `{reason}`")]
    InvalidResponse { url: String, reason: String },
    #[error("Invalid request: `{0}`")]
    InvalidRequest(String),
}
