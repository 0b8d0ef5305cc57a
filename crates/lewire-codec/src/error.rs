/// Errors that can occur while packing or unpacking values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The sink cannot accept the bytes required by the operation.
    #[error("buffer capacity exhausted ({needed} bytes needed, {available} available)")]
    BufferCapacity { needed: usize, available: usize },

    /// The source holds fewer bytes than the operation requires.
    #[error("buffer underflow ({needed} bytes needed, {remaining} remaining)")]
    BufferUnderflow { needed: usize, remaining: usize },

    /// A text length prefix exceeds the maximum decodable length.
    #[error("String length too large: {len}")]
    LengthOverflow { len: i64 },

    /// Text payload is not valid UTF-8 (strict policy only).
    #[error("invalid UTF-8 in text payload: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// Fail with `BufferCapacity` unless the sink can take `needed` more bytes.
pub(crate) fn ensure_capacity<B: bytes::BufMut>(buf: &B, needed: usize) -> Result<()> {
    let available = buf.remaining_mut();
    if available < needed {
        return Err(CodecError::BufferCapacity { needed, available });
    }
    Ok(())
}

/// Fail with `BufferUnderflow` unless the source holds `needed` more bytes.
pub(crate) fn ensure_remaining<B: bytes::Buf>(buf: &B, needed: usize) -> Result<()> {
    let remaining = buf.remaining();
    if remaining < needed {
        return Err(CodecError::BufferUnderflow { needed, remaining });
    }
    Ok(())
}
