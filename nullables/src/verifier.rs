//! Nullable verifier that records submissions without sending them.

use miniapp_types::{InitDataCandidate, VerificationResult};
use miniapp_verifier::InitDataVerifier;
use std::cell::RefCell;

/// A verification endpoint that answers from a script and records every
/// candidate it was asked to check.
pub struct NullVerifier {
    response: VerificationResult,
    submitted: RefCell<Vec<InitDataCandidate>>,
}

impl NullVerifier {
    /// Answer every request with `response`.
    pub fn responding(response: VerificationResult) -> Self {
        Self {
            response,
            submitted: RefCell::new(Vec::new()),
        }
    }

    /// Accept every candidate as the given user.
    pub fn accepting(user: serde_json::Value) -> Self {
        Self::responding(VerificationResult::from_response(
            200,
            serde_json::json!({ "ok": true, "user": user }),
        ))
    }

    /// Reject every candidate the way the endpoint does on a bad signature.
    pub fn rejecting() -> Self {
        Self::responding(VerificationResult::from_response(
            400,
            serde_json::json!({ "detail": "init_data invalid" }),
        ))
    }

    /// Behave as if the endpoint were unreachable.
    pub fn unreachable() -> Self {
        Self::responding(VerificationResult::transport_failure("connection refused"))
    }

    /// All candidates submitted so far.
    pub fn submitted(&self) -> Vec<InitDataCandidate> {
        self.submitted.borrow().clone()
    }
}

impl InitDataVerifier for NullVerifier {
    async fn verify(&self, candidate: &InitDataCandidate) -> VerificationResult {
        self.submitted.borrow_mut().push(candidate.clone());
        self.response.clone()
    }
}
