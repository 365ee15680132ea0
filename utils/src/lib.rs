//! Shared utilities for the Mini App handshake.

pub mod logging;

pub use logging::{init_logging, LogFormat, LogFormatError};
