use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Bytes left alone by ECMAScript `encodeURIComponent`:
/// A-Z a-z 0-9 and `- _ . ! ~ * ' ( )`
pub const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query component percent-encode set.
/// `URI_COMPONENT_SET` + `! ' ( ) ~`, so only A-Z a-z 0-9 and `- _ . *` pass through.
pub const QUERY_COMPONENT_SET: &AsciiSet = &URI_COMPONENT_SET
    .add(b'!')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'~');

/// Check if a byte passes through the query component encoder unchanged.
/// Mirrors `QUERY_COMPONENT_SET` for the all-safe fast path.
pub fn is_query_component_safe(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*')
}

/// Hex digit value for percent decoding
pub fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
