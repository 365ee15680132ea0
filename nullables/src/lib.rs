//! Nullable infrastructure for deterministic testing.
//!
//! The bootstrap run depends on two collaborators it does not own: the host
//! integration object and the verification endpoint. This crate provides
//! test-friendly implementations that:
//! - Return scripted values
//! - Record how they were used
//! - Never touch a browser or the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod host;
pub mod verifier;

pub use host::NullHost;
pub use verifier::NullVerifier;
