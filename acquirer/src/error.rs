use thiserror::Error;

/// A failed read of the host integration object.
///
/// The host may be partially initialised when first touched; callers treat
/// every variant as "not yet available".
#[derive(Debug, Error)]
pub enum HostReadError {
    #[error("host object not ready: {0}")]
    NotReady(String),

    #[error("host object unreadable: {0}")]
    Unreadable(String),
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
