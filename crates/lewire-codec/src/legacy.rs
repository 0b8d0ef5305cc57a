//! 32-bit length-prefixed text, kept for peers that predate the 64-bit
//! prefix. Encode only; there is intentionally no decoder.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{CodecError, Result};
use crate::wire::{LEGACY_PREFIX_SIZE, MAX_TEXT_LEN};

/// Encode `text` as a standalone legacy frame.
///
/// Wire format:
/// ```text
/// ┌─────────────────────┬──────────────────────┐
/// │ Length n (4B LE i32)│ UTF-8 bytes (n)       │
/// └─────────────────────┴──────────────────────┘
/// ```
///
/// `None` is encoded like `""`. Text longer than `i32::MAX` bytes cannot be
/// represented and fails with `LengthOverflow`.
pub fn pack_string_legacy<'a>(text: impl Into<Option<&'a str>>) -> Result<Bytes> {
    let bytes = text.into().unwrap_or_default().as_bytes();
    if bytes.len() > MAX_TEXT_LEN {
        return Err(CodecError::LengthOverflow {
            len: bytes.len() as i64,
        });
    }

    let mut buf = BytesMut::with_capacity(LEGACY_PREFIX_SIZE + bytes.len());
    buf.put_i32_le(bytes.len() as i32);
    buf.put_slice(bytes);
    Ok(buf.freeze())
}
