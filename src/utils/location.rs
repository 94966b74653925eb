//! Encoding of redirect targets for the `Location` header.
//!
//! Stored URLs are kept exactly as submitted, so they may hold spaces,
//! control characters or non-ASCII text that a header cannot carry. Those
//! bytes are percent-encoded as UTF-8. Characters that are already legal in a
//! URL, including existing `%XX` escapes, pass through unchanged, so ordinary
//! URLs come out byte-for-byte identical. A `%` that does not start a valid
//! escape becomes `%25`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Printable ASCII that may not appear in a URL; non-ASCII is always encoded.
const LOCATION_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Returns `target` with every byte that is not URL-safe percent-encoded.
///
/// The result is visible ASCII only and therefore a valid header value.
pub fn encode_location(target: &str) -> String {
    let mut encoded = String::with_capacity(target.len());
    let mut rest = target;

    while let Some(pos) = rest.find('%') {
        encoded.extend(utf8_percent_encode(&rest[..pos], LOCATION_ENCODE_SET));

        let after = &rest[pos + 1..];
        if starts_with_hex_pair(after) {
            encoded.push('%');
        } else {
            encoded.push_str("%25");
        }
        rest = after;
    }

    encoded.extend(utf8_percent_encode(rest, LOCATION_ENCODE_SET));
    encoded
}

fn starts_with_hex_pair(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_hexdigit() && bytes[1].is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_urls_unchanged() {
        for url in [
            "https://example.com",
            "https://example.com/some/page?q=1&r=a,b#frag",
            "http://localhost:3000/a_b-c~d!e*f(g)h'i;j:k@l=m+n$o[p]|q^r\\s",
        ] {
            assert_eq!(encode_location(url), url);
        }
    }

    #[test]
    fn test_control_characters_encoded() {
        assert_eq!(
            encode_location("https://example.com/a\nb\r\tc"),
            "https://example.com/a%0Ab%0D%09c"
        );
        assert_eq!(encode_location("a\u{7f}b"), "a%7Fb");
    }

    #[test]
    fn test_unsafe_printable_ascii_encoded() {
        assert_eq!(
            encode_location("https://example.com/a b\"<>`{}"),
            "https://example.com/a%20b%22%3C%3E%60%7B%7D"
        );
    }

    #[test]
    fn test_non_ascii_encoded_as_utf8() {
        assert_eq!(
            encode_location("https://example.com/café"),
            "https://example.com/caf%C3%A9"
        );
    }

    #[test]
    fn test_existing_escapes_kept() {
        assert_eq!(
            encode_location("https://example.com/a%20b%2Fc"),
            "https://example.com/a%20b%2Fc"
        );
    }

    #[test]
    fn test_stray_percent_encoded() {
        assert_eq!(encode_location("100%"), "100%25");
        assert_eq!(encode_location("50%off"), "50%25off");
        assert_eq!(encode_location("%4"), "%254");
        assert_eq!(encode_location("%%41"), "%25%41");
    }

    #[test]
    fn test_result_is_valid_header_value() {
        let encoded = encode_location("https://example.com/\0\n é %zz");
        assert!(axum::http::HeaderValue::from_str(&encoded).is_ok());
    }
}
