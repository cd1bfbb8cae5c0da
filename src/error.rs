/// Errors reported by the strict decoding surface.
///
/// The collection itself never fails: lenient parsing keeps malformed escapes
/// literally and replaces invalid UTF-8. Only `QueryParams::try_parse` and
/// `try_decode_component` surface these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` not followed by two hexadecimal digits
    InvalidPercentEncoding,
    /// Decoded bytes are not valid UTF-8
    InvalidUtf8,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::InvalidUtf8 => "Invalid UTF-8 in decoded component",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Result type for strict decoding operations
pub type Result<T> = core::result::Result<T, DecodeError>;
