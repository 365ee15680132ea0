//! Init-data acquisition.
//!
//! Searches, in strict priority order, for the init-data string the Telegram
//! client hands to a Mini App:
//! 1. the host integration object, read once;
//! 2. the same field, polled for a bounded time (the host may attach late);
//! 3. the page URL's query string (aliases, optional);
//! 4. a raw `tgWebAppData` match in the URL fragment, decoded exactly once;
//! 5. the fragment parsed as key/value pairs (same aliases as the query).
//!
//! The first non-empty value wins and later sources are never consulted.
//! Read failures of any source count as "no candidate" and are never surfaced.

pub mod acquirer;
pub mod decode;
pub mod error;
pub mod host;
pub mod location;
pub mod poll;

pub use acquirer::{Acquired, Acquirer, AcquirerConfig, INIT_DATA_ALIASES};
pub use decode::{decode_once, raw_fragment_value, FRAGMENT_DATA_KEY};
pub use error::{HostReadError, LocationError};
pub use host::{HostObject, NoHost};
pub use location::PageLocation;
pub use poll::poll_until;
