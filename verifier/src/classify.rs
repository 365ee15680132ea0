//! Mapping of endpoint answers to bootstrap outcomes.

use miniapp_types::{BootstrapOutcome, VerificationResult, VerifiedIdentity};

/// Classify a verification result.
///
/// `Verified` requires all three of: transport success, a 2xx status, and a
/// `user` object in the body. Everything else is `Rejected` with the full
/// result kept for diagnostics.
pub fn classify(result: VerificationResult) -> BootstrapOutcome {
    if result.ok {
        match VerifiedIdentity::from_body(&result.body) {
            Ok(identity) => return BootstrapOutcome::Verified(identity),
            Err(e) => tracing::warn!(status = result.status, "{e}"),
        }
    } else if result.is_transport_failure() {
        tracing::warn!("verification request did not complete");
    } else {
        tracing::warn!(status = result.status, "verification rejected");
    }
    BootstrapOutcome::Rejected(result)
}
