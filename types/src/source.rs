//! Places an init-data candidate can be read from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::MiniAppError;

/// An acquisition source, ranked by trust and recency.
///
/// The derived `Ord` follows the fixed consultation order: a lower source is
/// always tried before a higher one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcquisitionSource {
    /// Direct read of the host integration object, no waiting.
    HostObjectSync,
    /// Bounded polling of the same host field.
    HostObjectPolled,
    /// Query-string aliases of the page URL.
    UrlQuery,
    /// Raw substring match of `tgWebAppData` in the fragment, decoded once.
    UrlFragmentRaw,
    /// Generic key/value parse of the fragment, same aliases as the query.
    UrlFragmentParsed,
}

impl AcquisitionSource {
    /// All sources in consultation order.
    pub const ORDER: [AcquisitionSource; 5] = [
        AcquisitionSource::HostObjectSync,
        AcquisitionSource::HostObjectPolled,
        AcquisitionSource::UrlQuery,
        AcquisitionSource::UrlFragmentRaw,
        AcquisitionSource::UrlFragmentParsed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AcquisitionSource::HostObjectSync => "host-object-sync",
            AcquisitionSource::HostObjectPolled => "host-object-polled",
            AcquisitionSource::UrlQuery => "url-query",
            AcquisitionSource::UrlFragmentRaw => "url-fragment-raw",
            AcquisitionSource::UrlFragmentParsed => "url-fragment-parsed",
        }
    }

    /// Whether the candidate came from the host integration object rather
    /// than the page URL.
    pub fn is_host(&self) -> bool {
        matches!(
            self,
            AcquisitionSource::HostObjectSync | AcquisitionSource::HostObjectPolled
        )
    }
}

impl fmt::Display for AcquisitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcquisitionSource {
    type Err = MiniAppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| MiniAppError::UnknownSource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_ord() {
        let mut sorted = AcquisitionSource::ORDER;
        sorted.sort();
        assert_eq!(sorted, AcquisitionSource::ORDER);
    }

    #[test]
    fn names_parse_back() {
        for source in AcquisitionSource::ORDER {
            assert_eq!(source.as_str().parse::<AcquisitionSource>().unwrap(), source);
        }
        assert!("cookie".parse::<AcquisitionSource>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&AcquisitionSource::UrlFragmentRaw).unwrap();
        assert_eq!(json, r#""url-fragment-raw""#);
    }
}
