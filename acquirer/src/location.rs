//! The page URL, split into its raw query and fragment.

use url::form_urlencoded;
use url::Url;

use crate::LocationError;

/// Query string and fragment of the page URL, byte-for-byte as they appear
/// in the address.
///
/// `Url` is only used for validation: it re-encodes some characters, so the
/// parts are sliced from the original text instead, after the same
/// whitespace cleanup a browser applies to an address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLocation {
    query: String,
    fragment: String,
}

impl PageLocation {
    /// Split an absolute page URL.
    pub fn parse(url: &str) -> Result<Self, LocationError> {
        let url = strip_url_whitespace(url);
        Url::parse(&url)?;
        let (before_fragment, fragment) = match url.split_once('#') {
            Some((head, fragment)) => (head, fragment),
            None => (url.as_str(), ""),
        };
        let query = before_fragment
            .split_once('?')
            .map(|(_, query)| query)
            .unwrap_or("");
        Ok(Self::from_parts(query, fragment))
    }

    /// Build from already-separated parts. A leading `?` or `#` is dropped.
    pub fn from_parts(query: &str, fragment: &str) -> Self {
        Self {
            query: query.strip_prefix('?').unwrap_or(query).to_string(),
            fragment: fragment.strip_prefix('#').unwrap_or(fragment).to_string(),
        }
    }

    /// A URL with neither query nor fragment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Raw query, without the `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Raw fragment, without the `#`.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// First non-empty value among `aliases`, tried in order, from the query.
    pub fn query_param(&self, aliases: &[&str]) -> Option<String> {
        first_alias(&self.query, aliases)
    }

    /// First non-empty value among `aliases`, tried in order, from the
    /// fragment parsed as key/value pairs.
    pub fn fragment_param(&self, aliases: &[&str]) -> Option<String> {
        first_alias(&self.fragment, aliases)
    }
}

/// Trim leading and trailing C0 controls and spaces, then drop every ASCII
/// tab and newline, as the URL parser does before reading an address.
fn strip_url_whitespace(url: &str) -> String {
    url.trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Form-urlencoded lookup with the semantics of a browser `URLSearchParams`:
/// the first occurrence of a key wins, `+` reads as a space, and an empty
/// value falls through to the next alias.
fn first_alias(input: &str, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|alias| {
        form_urlencoded::parse(input.as_bytes())
            .find(|(key, _)| key == *alias)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    })
}
