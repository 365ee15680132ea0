//! The opaque init-data string issued by the Telegram client.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::MiniAppError;

/// A candidate init-data string, carried exactly as it was read.
///
/// The blob is signed by the Telegram client over its decoded fields, so any
/// re-encoding, re-ordering or partial decoding breaks verification. The type
/// only ever hands the bytes out unchanged.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitDataCandidate(String);

impl InitDataCandidate {
    /// Wrap a raw value. Empty strings are not candidates.
    pub fn new(raw: impl Into<String>) -> Result<Self, MiniAppError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(MiniAppError::EmptyCandidate);
        }
        Ok(Self(raw))
    }

    /// Wrap a raw value, treating the empty string as "no candidate".
    pub fn non_empty(raw: impl Into<String>) -> Option<Self> {
        Self::new(raw).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// The blob carries the signed user identity, so it never goes to logs verbatim.
impl fmt::Debug for InitDataCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InitDataCandidate({} bytes)", self.0.len())
    }
}

impl AsRef<str> for InitDataCandidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_rejected() {
        assert!(matches!(
            InitDataCandidate::new(""),
            Err(MiniAppError::EmptyCandidate)
        ));
        assert!(InitDataCandidate::non_empty(String::new()).is_none());
    }

    #[test]
    fn bytes_are_kept_verbatim() {
        let raw = "query_id=AA%3D&user=%7B%22id%22%3A1%7D&hash=ab+cd";
        let candidate = InitDataCandidate::new(raw).unwrap();
        assert_eq!(candidate.as_str(), raw);
        assert_eq!(candidate.into_inner(), raw);
    }

    #[test]
    fn debug_output_hides_contents() {
        let candidate = InitDataCandidate::new("hash=secret").unwrap();
        let dbg = format!("{candidate:?}");
        assert!(!dbg.contains("secret"));
        assert!(dbg.contains("11 bytes"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let candidate = InitDataCandidate::new("a=1&b=2").unwrap();
        assert_eq!(serde_json::to_string(&candidate).unwrap(), r#""a=1&b=2""#);
    }
}
