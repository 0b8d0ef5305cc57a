use bytes::{Buf, BufMut};
use tracing::debug;

use crate::config::{CodecConfig, Utf8Policy};
use crate::error::{ensure_capacity, ensure_remaining, CodecError, Result};
use crate::scalar::unpack;
use crate::wire::TEXT_PREFIX_SIZE;

/// Number of bytes `pack_string` writes for `text`.
pub fn text_wire_size<'a>(text: impl Into<Option<&'a str>>) -> usize {
    TEXT_PREFIX_SIZE + text.into().map_or(0, str::len)
}

/// Append length-prefixed text to `buf`.
///
/// Wire format:
/// ```text
/// ┌─────────────────────┬──────────────────────┐
/// │ Length n (8B LE i64)│ UTF-8 bytes (n)       │
/// └─────────────────────┴──────────────────────┘
/// ```
///
/// `None` is written exactly like `""`: a zero prefix and no payload. The
/// sink's capacity is checked for the whole `8 + n` bytes before anything is
/// written.
pub fn pack_string<'a, B: BufMut>(buf: &mut B, text: impl Into<Option<&'a str>>) -> Result<()> {
    let bytes = text.into().unwrap_or_default().as_bytes();
    ensure_capacity(buf, TEXT_PREFIX_SIZE + bytes.len())?;
    buf.put_i64_le(bytes.len() as i64);
    buf.put_slice(bytes);
    Ok(())
}

/// Decode length-prefixed text with the default configuration.
///
/// Invalid UTF-8 is replaced with U+FFFD.
pub fn unpack_string<B: Buf>(buf: &mut B) -> Result<String> {
    unpack_string_with(buf, &CodecConfig::default())
}

/// Decode length-prefixed text.
///
/// A prefix of zero or less yields `""` and consumes only the prefix. A
/// prefix above the configured limit fails with `LengthOverflow`. On any
/// error the read cursor is indeterminate and the stream should be dropped.
pub fn unpack_string_with<B: Buf>(buf: &mut B, config: &CodecConfig) -> Result<String> {
    let len: i64 = unpack(buf)?;
    if len <= 0 {
        return Ok(String::new());
    }

    let max = config.effective_max_text_len();
    if len > max as i64 {
        debug!(len, max, "text length prefix exceeds limit");
        return Err(CodecError::LengthOverflow { len });
    }

    let len = len as usize;
    ensure_remaining(buf, len)?;
    let mut payload = vec![0u8; len];
    buf.copy_to_slice(&mut payload);

    decode_utf8(payload, config.utf8)
}

fn decode_utf8(payload: Vec<u8>, policy: Utf8Policy) -> Result<String> {
    match String::from_utf8(payload) {
        Ok(text) => Ok(text),
        Err(err) => match policy {
            Utf8Policy::Strict => {
                debug!(error = %err, "rejecting text payload");
                Err(CodecError::InvalidUtf8(err.utf8_error()))
            }
            Utf8Policy::Lossy => {
                debug!(error = %err, "substituting invalid UTF-8 in text payload");
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        },
    }
}
