//! Mini App bootstrap: one end-to-end handshake per page load.
//!
//! A run:
//! - Acquires at most one init-data candidate, trying sources in priority order
//! - Commits to the first candidate found, even if verification later fails
//! - Submits it once to the verification endpoint
//! - Classifies the answer into a [`BootstrapOutcome`]
//!
//! Runs are stateless and never fail: every problem ends in `Rejected` or
//! `NotFound`.

pub mod config;
pub mod error;
pub mod run;
pub mod tracing_spans;

pub use config::BootstrapConfig;
pub use error::BootstrapError;
pub use run::Bootstrap;

pub use miniapp_types::BootstrapOutcome;
