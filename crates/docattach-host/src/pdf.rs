//! PDF syntax helpers for rendering object dictionaries.

use docattach_types::Timestamp;

/// Format a timestamp as a PDF date string body, e.g. `D:20240102030405Z`.
pub fn date(ts: &Timestamp) -> String {
    ts.format("D:%Y%m%d%H%M%SZ").to_string()
}

/// Render a literal string, escaping the delimiters and backslash.
pub fn literal_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('(');
    for c in s.chars() {
        match c {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(c);
            }
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push(')');
    out
}

/// Render a text string.
///
/// ASCII text becomes a literal string. Anything else is written as UTF-16BE
/// with a byte order mark, in hex, so readers do not decode it as
/// PDFDocEncoding.
pub fn text_string(s: &str) -> String {
    if s.is_ascii() {
        return literal_string(s);
    }
    let mut bytes = Vec::with_capacity(2 + s.len() * 2);
    bytes.extend_from_slice(&[0xfe, 0xff]);
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    hex_string(&bytes)
}

/// Render bytes as a hexadecimal string, e.g. `<0aff>`.
pub fn hex_string(bytes: &[u8]) -> String {
    format!("<{}>", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn date_format() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(date(&ts), "D:20240102030405Z");
    }

    #[test]
    fn literal_string_escapes_delimiters() {
        assert_eq!(literal_string("a(b)c"), "(a\\(b\\)c)");
        assert_eq!(literal_string("back\\slash"), "(back\\\\slash)");
        assert_eq!(literal_string("line\nbreak"), "(line\\nbreak)");
    }

    #[test]
    fn text_string_keeps_ascii_literal() {
        assert_eq!(text_string("a(b).txt"), "(a\\(b\\).txt)");
    }

    #[test]
    fn text_string_encodes_non_ascii_as_utf16be() {
        assert_eq!(text_string("é"), "<feff00e9>");
        // Outside the BMP: surrogate pair.
        assert_eq!(text_string("😀"), "<feffd83dde00>");
    }

    #[test]
    fn hex_string_format() {
        assert_eq!(hex_string(&[0x0a, 0xff]), "<0aff>");
    }
}
