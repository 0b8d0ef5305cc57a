use bytes::Buf;
use tracing::trace;

use crate::config::{CodecConfig, Utf8Policy};
use crate::error::Result;
use crate::scalar::{self, Scalar};
use crate::text::unpack_string_with;
use crate::wire::WireType;

/// Unpacks a sequence of values from any `Buf` source.
///
/// Values must be read in the order and with the types they were packed.
/// After any error the cursor is indeterminate and the unpacker should be
/// dropped.
#[derive(Debug)]
pub struct Unpacker<B> {
    inner: B,
    consumed: usize,
    config: CodecConfig,
}

impl<B: Buf> Unpacker<B> {
    /// Create an unpacker with default configuration.
    pub fn new(inner: B) -> Self {
        Self::with_config(inner, CodecConfig::default())
    }

    /// Create an unpacker with explicit configuration.
    pub fn with_config(inner: B, config: CodecConfig) -> Self {
        Self {
            inner,
            consumed: 0,
            config,
        }
    }

    /// Unpack any scalar.
    pub fn unpack<T: Scalar>(&mut self) -> Result<T> {
        let value = scalar::unpack(&mut self.inner)?;
        self.advance(T::WIRE_TYPE, T::WIDTH);
        Ok(value)
    }

    pub fn int(&mut self) -> Result<i32> {
        self.unpack()
    }

    pub fn long(&mut self) -> Result<i64> {
        self.unpack()
    }

    pub fn float(&mut self) -> Result<f32> {
        self.unpack()
    }

    pub fn double(&mut self) -> Result<f64> {
        self.unpack()
    }

    /// Unpack length-prefixed text using this unpacker's configuration.
    pub fn string(&mut self) -> Result<String> {
        let before = self.inner.remaining();
        let text = unpack_string_with(&mut self.inner, &self.config)?;
        self.advance(WireType::Text, before - self.inner.remaining());
        Ok(text)
    }

    /// Bytes consumed through this unpacker so far.
    pub fn position(&self) -> usize {
        self.consumed
    }

    /// Bytes left in the source.
    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    /// True when the source is exhausted.
    pub fn is_empty(&self) -> bool {
        !self.inner.has_remaining()
    }

    /// Switch UTF-8 handling for subsequent text.
    pub fn set_utf8_policy(&mut self, policy: Utf8Policy) {
        self.config.utf8 = policy;
    }

    /// Update the text length limit for subsequent text.
    pub fn set_max_text_len(&mut self, max_text_len: usize) {
        self.config.max_text_len = max_text_len;
    }

    /// Current unpacker configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &B {
        &self.inner
    }

    /// Consume the unpacker and return the source with its cursor.
    pub fn into_inner(self) -> B {
        self.inner
    }

    fn advance(&mut self, wire_type: WireType, len: usize) {
        self.consumed += len;
        trace!(%wire_type, len, position = self.consumed, "unpacked value");
    }
}
