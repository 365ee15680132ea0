//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the Mini App handshake.
#[derive(Debug, Error)]
pub enum MiniAppError {
    #[error("init data candidate is empty")]
    EmptyCandidate,

    #[error("unknown acquisition source: {0}")]
    UnknownSource(String),

    #[error("verification response has no user object")]
    MissingUser,
}
