//! Pre-built [`tracing::Span`] constructors for bootstrap operations.
//!
//! Consistent span names and fields make a run easy to follow in the logs.

use tracing::{info_span, Span};

/// Span covering one full bootstrap run, from acquisition to outcome.
pub fn bootstrap_run_span() -> Span {
    info_span!("bootstrap_run")
}

/// Span covering the single call to the verification endpoint.
pub fn verify_span(source: &str, candidate_len: usize) -> Span {
    info_span!("verify", source = %source, len = candidate_len)
}
