//! Query-string codec: fragment splitting and the page's escape convention.
//!
//! Fragments stay verbatim wherever the core does not interpret them, so an
//! unknown key survives a round trip byte for byte. The escape table matches
//! the encoding the dashboard's links already use: ASCII alphanumerics and
//! `@*_+-./` pass through, every other byte becomes `%XX`.

use core::fmt::Write as _;

/// One `key` or `key=value` fragment of a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    raw: &'a str,
}

impl<'a> Fragment<'a> {
    /// The fragment exactly as it appeared.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The part before `=`, or the whole fragment for a bare flag.
    pub fn key(&self) -> &'a str {
        match self.raw.find('=') {
            Some(pos) => &self.raw[..pos],
            None => self.raw,
        }
    }

    /// The part after `=`, still escaped. `None` for a bare flag.
    pub fn raw_value(&self) -> Option<&'a str> {
        self.raw.find('=').map(|pos| &self.raw[pos + 1..])
    }

    /// The unescaped value. `None` for a bare flag.
    pub fn value(&self) -> Option<String> {
        self.raw_value().map(unescape)
    }
}

/// Iterate the non-empty fragments of a query string.
pub fn fragments(query: &str) -> impl Iterator<Item = Fragment<'_>> {
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|raw| Fragment { raw })
}

/// Unescaped value of the first `key=...` fragment with this key.
///
/// A bare `key` fragment is a flag, not a value (see [`has_flag`]); `key=`
/// yields an empty string. The two cases stay distinguishable, which some
/// keys rely on.
pub fn value_of(query: &str, key: &str) -> Option<String> {
    fragments(query)
        .find(|fragment| fragment.raw_value().is_some() && fragment.key() == key)
        .and_then(|fragment| fragment.value())
}

/// True when some fragment is exactly the bare key, with no `=`.
pub fn has_flag(query: &str, key: &str) -> bool {
    fragments(query).any(|fragment| fragment.raw() == key)
}

const UNRESERVED: &[u8] = b"@*_+-./";

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || UNRESERVED.contains(&byte)
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Percent-encode a query value.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// Decode `%XX` escapes. Lenient: malformed or truncated escapes stay
/// verbatim, and decoded bytes that do not form UTF-8 are replaced.
pub fn unescape(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Encode an `rrdopts`-style value: spaces become `+`. A literal plus is
/// percent-encoded so the plus-for-space convention stays reversible.
pub fn encode_spaces_as_plus(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte == b' ' {
            out.push('+');
        } else if byte == b'+' {
            out.push_str("%2B");
        } else if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// Decode an `rrdopts`-style value: `+` means space, then `%XX` escapes.
pub fn decode_plus(value: &str) -> String {
    unescape(&value.replace('+', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_split_on_ampersand_and_skip_empties() {
        let keys: Vec<&str> = fragments("a=1&&b&c=3").map(|f| f.key()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn first_matching_value_wins() {
        assert_eq!(value_of("host=web1&host=web2", "host"), Some("web1".into()));
    }

    #[test]
    fn empty_value_is_present_but_empty() {
        assert_eq!(value_of("expand_period=&x=1", "expand_period"), Some("".into()));
    }

    #[test]
    fn bare_key_is_not_a_value() {
        assert_eq!(value_of("host&service=ping", "host"), None);
    }

    #[test]
    fn flags_require_the_exact_bare_key() {
        assert!(has_flag("a=1&expand_controls&b=2", "expand_controls"));
        assert!(!has_flag("expand_controls=", "expand_controls"));
        assert!(!has_flag("expand_controls=true", "expand_controls"));
        assert!(!has_flag("expand_controls2", "expand_controls"));
    }

    #[test]
    fn values_are_unescaped() {
        assert_eq!(value_of("service=HTTP%20Check", "service"), Some("HTTP Check".into()));
    }

    #[test]
    fn escape_passes_the_unreserved_set() {
        assert_eq!(escape("Az09@*_+-./"), "Az09@*_+-./");
    }

    #[test]
    fn escape_encodes_everything_else() {
        assert_eq!(escape("a b"), "a%20b");
        assert_eq!(escape("a,b"), "a%2Cb");
        assert_eq!(escape("50%"), "50%25");
    }

    #[test]
    fn escape_encodes_utf8_bytes() {
        assert_eq!(escape("é"), "%C3%A9");
    }

    #[test]
    fn unescape_keeps_malformed_escapes_verbatim() {
        assert_eq!(unescape("%zz"), "%zz");
        assert_eq!(unescape("abc%"), "abc%");
        assert_eq!(unescape("%2"), "%2");
    }

    #[test]
    fn plus_coding_swaps_spaces() {
        assert_eq!(encode_spaces_as_plus("-s now-3600 -e now"), "-s+now-3600+-e+now");
        assert_eq!(decode_plus("-s+now-3600+-e+now"), "-s now-3600 -e now");
    }

    #[test]
    fn literal_plus_survives_the_plus_coding() {
        assert_eq!(encode_spaces_as_plus("a+b c"), "a%2Bb+c");
        assert_eq!(decode_plus("a%2Bb+c"), "a+b c");
    }
}
