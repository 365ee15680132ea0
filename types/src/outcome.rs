//! Terminal state of one bootstrap run.

use serde::{Deserialize, Serialize};

use crate::{VerificationResult, VerifiedIdentity};

/// How a bootstrap run ended.
///
/// Created fresh for every run and never mutated once rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// The endpoint vouched for the candidate and returned a user.
    Verified(VerifiedIdentity),
    /// The endpoint denied trust, or could not be reached.
    Rejected(VerificationResult),
    /// No source yielded a candidate.
    NotFound,
}

impl BootstrapOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, BootstrapOutcome::Verified(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BootstrapOutcome::Verified(_) => "verified",
            BootstrapOutcome::Rejected(_) => "rejected",
            BootstrapOutcome::NotFound => "not_found",
        }
    }
}
