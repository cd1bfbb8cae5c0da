use crate::character_sets::{QUERY_COMPONENT_SET, hex_value, is_query_component_safe};
use crate::compat::{Cow, String, Vec};
use crate::error::{DecodeError, Result};
use crate::helpers::needs_decoding;
use percent_encoding::{percent_decode, utf8_percent_encode};

/// Percent-encode a query component.
///
/// Everything except A-Z a-z 0-9 and `- _ . *` is escaped as `%XX`, then an
/// encoded space becomes `+` and an encoded NUL is written back as a raw NUL.
pub fn encode_component(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    encode_component_into(&mut result, input);
    result
}

/// Write an encoded query component directly to buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());
    // Writing into a String cannot fail
    let _ = write_encoded_component(buffer, input);
}

/// Write an encoded query component to any `fmt::Write` sink (e.g. a `Formatter`)
pub fn write_encoded_component<W: core::fmt::Write>(out: &mut W, input: &str) -> core::fmt::Result {
    if input.bytes().all(is_query_component_safe) {
        return out.write_str(input);
    }

    // Escaped bytes come out of the encoder as one "%XX" chunk each
    for chunk in utf8_percent_encode(input, QUERY_COMPONENT_SET) {
        match chunk {
            "%20" => out.write_char('+')?,
            "%00" => out.write_char('\0')?,
            _ => out.write_str(chunk)?,
        }
    }
    Ok(())
}

/// Replace every `+` with a space ahead of percent decoding
fn plus_to_space(input: &str) -> Vec<u8> {
    input
        .bytes()
        .map(|b| if b == b'+' { b' ' } else { b })
        .collect()
}

/// Decode a query component (`application/x-www-form-urlencoded` rules).
///
/// `+` becomes a space, then `%XX` sequences are decoded. Malformed escapes are
/// kept literally and invalid UTF-8 is replaced with U+FFFD.
/// Returns a borrowed string when nothing needs decoding.
pub fn decode_component(input: &str) -> Cow<'_, str> {
    if !needs_decoding(input) {
        return Cow::Borrowed(input);
    }

    let spaced = plus_to_space(input);
    let decoded: Vec<u8> = percent_decode(&spaced).collect();
    match String::from_utf8(decoded) {
        Ok(s) => Cow::Owned(s),
        Err(err) => {
            #[cfg(feature = "logging")]
            log::debug!("Lossy UTF-8 fallback while decoding query component {input:?}");
            Cow::Owned(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Check that every `%` starts a complete `%XX` escape
fn validate_escapes(input: &str) -> Result<()> {
    let bytes = input.as_bytes();
    for pos in memchr::memchr_iter(b'%', bytes) {
        let hi = bytes.get(pos + 1).copied().and_then(hex_value);
        let lo = bytes.get(pos + 2).copied().and_then(hex_value);
        if hi.is_none() || lo.is_none() {
            return Err(DecodeError::InvalidPercentEncoding);
        }
    }
    Ok(())
}

/// Strictly decode a query component.
///
/// Same rules as [`decode_component`], but a malformed escape fails with
/// [`DecodeError::InvalidPercentEncoding`] and invalid UTF-8 fails with
/// [`DecodeError::InvalidUtf8`].
pub fn try_decode_component(input: &str) -> Result<String> {
    if !needs_decoding(input) {
        return Ok(String::from(input));
    }
    validate_escapes(input)?;

    let spaced = plus_to_space(input);
    let decoded: Vec<u8> = percent_decode(&spaced).collect();
    String::from_utf8(decoded).map_err(|_| DecodeError::InvalidUtf8)
}
