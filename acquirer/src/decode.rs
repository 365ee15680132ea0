//! Raw fragment matching and single-pass percent-decoding.
//!
//! The Telegram client puts the signed blob into the fragment as
//! `tgWebAppData=<percent-encoded init data>`. Generic fragment parsers may
//! already have decoded parts of it, so the value is captured as an untouched
//! substring and decoded exactly once here. Zero or two decodes both change
//! bytes the signature covers.

use percent_encoding::percent_decode_str;

/// Fragment key carrying the nested, percent-encoded init data.
pub const FRAGMENT_DATA_KEY: &str = "tgWebAppData";

/// Find `key=` at the start of `fragment` or right after an `&`, and return
/// the raw text up to the next `&` (or the end).
///
/// `fragment` excludes the leading `#`. Nothing is decoded.
pub fn raw_fragment_value<'a>(fragment: &'a str, key: &str) -> Option<&'a str> {
    let needle = format!("{key}=");
    let mut from = 0;
    while let Some(offset) = fragment[from..].find(&needle) {
        let start = from + offset;
        if start == 0 || fragment.as_bytes()[start - 1] == b'&' {
            let rest = &fragment[start + needle.len()..];
            let end = rest.find('&').unwrap_or(rest.len());
            return Some(&rest[..end]);
        }
        from = start + 1;
    }
    None
}

/// Decode `%XX` escapes once.
///
/// Strict: a `%` not followed by two hex digits, or a result that is not
/// valid UTF-8, is a failure. `+` is left alone.
pub fn decode_once(raw: &str) -> Option<String> {
    if !escapes_well_formed(raw) {
        return None;
    }
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

fn escapes_well_formed(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex_pair = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !hex_pair {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_key_at_fragment_start() {
        assert_eq!(
            raw_fragment_value("tgWebAppData=a%26b%3Dc&tgWebAppVersion=7.0", FRAGMENT_DATA_KEY),
            Some("a%26b%3Dc")
        );
    }

    #[test]
    fn matches_key_after_ampersand() {
        assert_eq!(
            raw_fragment_value("tgWebAppVersion=7.0&tgWebAppData=x%3D1", FRAGMENT_DATA_KEY),
            Some("x%3D1")
        );
    }

    #[test]
    fn ignores_key_embedded_in_other_names() {
        assert_eq!(raw_fragment_value("xtgWebAppData=nope", FRAGMENT_DATA_KEY), None);
        assert_eq!(
            raw_fragment_value("xtgWebAppData=nope&tgWebAppData=yes", FRAGMENT_DATA_KEY),
            Some("yes")
        );
    }

    #[test]
    fn empty_value_is_returned_as_empty() {
        assert_eq!(raw_fragment_value("tgWebAppData=&a=1", FRAGMENT_DATA_KEY), Some(""));
        assert_eq!(raw_fragment_value("a=1", FRAGMENT_DATA_KEY), None);
    }

    #[test]
    fn decodes_exactly_once() {
        assert_eq!(decode_once("a%26b%3Dc").as_deref(), Some("a&b=c"));
        // A doubly-encoded value keeps its inner layer.
        assert_eq!(decode_once("user%3D%257B%257D").as_deref(), Some("user=%7B%7D"));
        assert_eq!(decode_once("a+b").as_deref(), Some("a+b"));
    }

    #[test]
    fn decodes_multibyte_utf8() {
        assert_eq!(decode_once("%D0%90%D0%BD%D1%8F").as_deref(), Some("Аня"));
    }

    #[test]
    fn malformed_escapes_fail() {
        assert_eq!(decode_once("%"), None);
        assert_eq!(decode_once("abc%2"), None);
        assert_eq!(decode_once("%zz"), None);
    }

    #[test]
    fn invalid_utf8_fails() {
        assert_eq!(decode_once("%E0%A4%A"), None);
        assert_eq!(decode_once("%FF"), None);
    }
}
