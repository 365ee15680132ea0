use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifierError {
    #[error("HTTP request to verification endpoint failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from verification endpoint: {0}")]
    InvalidResponse(String),

    #[error("verification endpoint unreachable: {0}")]
    Unreachable(String),
}
