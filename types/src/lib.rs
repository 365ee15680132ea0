//! Fundamental types for the Mini App init-data handshake.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the init-data candidate, the sources it can come from, the verification
//! endpoint's result, and the terminal outcome of a bootstrap run.

pub mod candidate;
pub mod error;
pub mod outcome;
pub mod source;
pub mod time;
pub mod user;
pub mod verification;

pub use candidate::InitDataCandidate;
pub use error::MiniAppError;
pub use outcome::BootstrapOutcome;
pub use source::AcquisitionSource;
pub use time::Timestamp;
pub use user::{VerifiedIdentity, VerifiedUser};
pub use verification::VerificationResult;
