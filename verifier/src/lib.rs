//! Verification endpoint client.
//!
//! The endpoint is the actual trust boundary: it recomputes the HMAC over the
//! init data with a secret derived from the bot credential. This crate only
//! submits one candidate and interprets the answer.
//!
//! Contract:
//! - `POST /auth/init` with `{"init_data": "<candidate>"}`
//! - success: 2xx and a body containing `{"user": {"id", ...}}`
//! - anything else is a rejection; transport failures report status `0`
//!
//! There is no retry: the call is a one-shot trust check.

pub mod classify;
pub mod client;
pub mod error;

pub use classify::classify;
pub use client::VerifierClient;
pub use error::VerifierError;

use miniapp_types::{InitDataCandidate, VerificationResult};
use std::future::Future;

/// Something that can vouch for an init-data candidate.
pub trait InitDataVerifier {
    /// Submit `candidate` once. Never fails: transport problems come back as a
    /// result with `ok == false` and status `0`.
    fn verify(&self, candidate: &InitDataCandidate) -> impl Future<Output = VerificationResult>;
}
