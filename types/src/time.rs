//! Timestamp type used for `auth_date`.
//!
//! Timestamps are Unix epoch seconds (UTC), exactly as the Telegram client
//! stamps them into init data.

use serde::{Deserialize, Serialize};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Read a timestamp from a JSON value.
    ///
    /// The verification endpoint coerces `auth_date` to an integer but passes
    /// the original string through when coercion fails, so both shapes occur.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_u64().map(Self),
            serde_json::Value::String(s) => s.trim().parse::<u64>().ok().map(Self),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_number_and_numeric_string() {
        assert_eq!(
            Timestamp::from_json(&json!(1700000000)),
            Some(Timestamp::new(1_700_000_000))
        );
        assert_eq!(
            Timestamp::from_json(&json!("1700000000")),
            Some(Timestamp::new(1_700_000_000))
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(Timestamp::from_json(&json!(-5)), None);
        assert_eq!(Timestamp::from_json(&json!("yesterday")), None);
        assert_eq!(Timestamp::from_json(&json!(null)), None);
        assert_eq!(Timestamp::from_json(&json!(1.5)), None);
    }
}
