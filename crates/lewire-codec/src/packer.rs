use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::Result;
use crate::scalar::{self, Scalar};
use crate::text::{pack_string, text_wire_size};
use crate::wire::WireType;

const INITIAL_BUFFER_CAPACITY: usize = 256;

/// Packs a sequence of values into any `BufMut` sink.
///
/// Each method writes one value at the current cursor and returns the
/// packer, so calls chain with `?`:
///
/// ```
/// use lewire_codec::Packer;
///
/// let mut packer = Packer::default();
/// packer.int(7)?.string("alice")?.double(12.5)?;
/// assert_eq!(packer.position(), 4 + 13 + 8);
/// # Ok::<(), lewire_codec::CodecError>(())
/// ```
#[derive(Debug)]
pub struct Packer<B> {
    inner: B,
    written: usize,
}

impl<B: BufMut> Packer<B> {
    /// Wrap an existing sink. The cursor starts at zero.
    pub fn new(inner: B) -> Self {
        Self { inner, written: 0 }
    }

    /// Pack any scalar.
    pub fn pack<T: Scalar>(&mut self, value: T) -> Result<&mut Self> {
        scalar::pack(&mut self.inner, value)?;
        self.advance(T::WIRE_TYPE, T::WIDTH);
        Ok(self)
    }

    pub fn int(&mut self, value: i32) -> Result<&mut Self> {
        self.pack(value)
    }

    pub fn long(&mut self, value: i64) -> Result<&mut Self> {
        self.pack(value)
    }

    pub fn float(&mut self, value: f32) -> Result<&mut Self> {
        self.pack(value)
    }

    pub fn double(&mut self, value: f64) -> Result<&mut Self> {
        self.pack(value)
    }

    /// Pack length-prefixed text; `None` is written as `""`.
    pub fn string<'a>(&mut self, text: impl Into<Option<&'a str>>) -> Result<&mut Self> {
        let text = text.into();
        pack_string(&mut self.inner, text)?;
        self.advance(WireType::Text, text_wire_size(text));
        Ok(self)
    }

    /// Bytes written through this packer so far.
    pub fn position(&self) -> usize {
        self.written
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &B {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    ///
    /// Writing through this reference bypasses the cursor count.
    pub fn get_mut(&mut self) -> &mut B {
        &mut self.inner
    }

    /// Consume the packer and return the sink.
    pub fn into_inner(self) -> B {
        self.inner
    }

    fn advance(&mut self, wire_type: WireType, len: usize) {
        self.written += len;
        trace!(%wire_type, len, position = self.written, "packed value");
    }
}

impl Packer<BytesMut> {
    /// Packer over a fresh growable buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(BytesMut::with_capacity(capacity))
    }

    /// Finish packing and return the encoded bytes.
    pub fn freeze(self) -> Bytes {
        self.inner.freeze()
    }
}

impl Default for Packer<BytesMut> {
    fn default() -> Self {
        Self::with_capacity(INITIAL_BUFFER_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn chained_values_land_in_order() {
        let mut packer = Packer::default();
        packer.int(1).unwrap().long(1).unwrap().string("hi").unwrap();

        let bytes = packer.freeze();
        assert_eq!(
            hex::encode(&bytes),
            concat!("01000000", "0100000000000000", "0200000000000000", "6869")
        );
    }

    #[test]
    fn position_tracks_bytes_written() {
        let mut packer = Packer::new(Vec::new());
        packer.float(0.5).unwrap();
        assert_eq!(packer.position(), 4);
        packer.string(None).unwrap();
        assert_eq!(packer.position(), 12);
        packer.double(-2.0).unwrap();
        assert_eq!(packer.position(), 20);
        assert_eq!(packer.get_ref().len(), 20);
    }

    #[test]
    fn failed_write_does_not_move_cursor() {
        let mut storage = [0u8; 6];
        let mut packer = Packer::new(&mut storage[..]);
        packer.int(3).unwrap();

        let err = packer.string("x").unwrap_err();
        assert!(matches!(err, CodecError::BufferCapacity { needed: 9, .. }));
        assert_eq!(packer.position(), 4);
        assert_eq!(packer.into_inner().len(), 2);
    }
}
