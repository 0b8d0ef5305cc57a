use bytes::{Buf, BufMut};

use crate::error::{ensure_capacity, ensure_remaining, Result};
use crate::wire::{WireType, WIDTH_32, WIDTH_64};

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A fixed-width value with a little-endian wire form.
///
/// Implemented for `i32`, `i64`, `f32` and `f64` only. Floats move through
/// their raw bits, so NaN payloads and signed zeros survive unchanged.
pub trait Scalar: sealed::Sealed + Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;
    /// Wire type tag.
    const WIRE_TYPE: WireType;

    #[doc(hidden)]
    fn put_le<B: BufMut>(self, buf: &mut B);

    #[doc(hidden)]
    fn get_le<B: Buf>(buf: &mut B) -> Self;
}

impl Scalar for i32 {
    const WIDTH: usize = WIDTH_32;
    const WIRE_TYPE: WireType = WireType::Int32;

    fn put_le<B: BufMut>(self, buf: &mut B) {
        buf.put_i32_le(self);
    }

    fn get_le<B: Buf>(buf: &mut B) -> Self {
        buf.get_i32_le()
    }
}

impl Scalar for i64 {
    const WIDTH: usize = WIDTH_64;
    const WIRE_TYPE: WireType = WireType::Int64;

    fn put_le<B: BufMut>(self, buf: &mut B) {
        buf.put_i64_le(self);
    }

    fn get_le<B: Buf>(buf: &mut B) -> Self {
        buf.get_i64_le()
    }
}

impl Scalar for f32 {
    const WIDTH: usize = WIDTH_32;
    const WIRE_TYPE: WireType = WireType::Float32;

    fn put_le<B: BufMut>(self, buf: &mut B) {
        buf.put_u32_le(self.to_bits());
    }

    fn get_le<B: Buf>(buf: &mut B) -> Self {
        f32::from_bits(buf.get_u32_le())
    }
}

impl Scalar for f64 {
    const WIDTH: usize = WIDTH_64;
    const WIRE_TYPE: WireType = WireType::Float64;

    fn put_le<B: BufMut>(self, buf: &mut B) {
        buf.put_u64_le(self.to_bits());
    }

    fn get_le<B: Buf>(buf: &mut B) -> Self {
        f64::from_bits(buf.get_u64_le())
    }
}

/// Append `value` to `buf` in little-endian order.
///
/// Writes exactly `T::WIDTH` bytes. Fails with `BufferCapacity` before
/// touching the sink if it cannot take them.
pub fn pack<T: Scalar, B: BufMut>(buf: &mut B, value: T) -> Result<()> {
    ensure_capacity(buf, T::WIDTH)?;
    value.put_le(buf);
    Ok(())
}

/// Consume `T::WIDTH` bytes from `buf` and decode them as little-endian.
///
/// Fails with `BufferUnderflow` without consuming anything if fewer bytes
/// remain.
pub fn unpack<T: Scalar, B: Buf>(buf: &mut B) -> Result<T> {
    ensure_remaining(buf, T::WIDTH)?;
    Ok(T::get_le(buf))
}

pub fn pack_int<B: BufMut>(buf: &mut B, value: i32) -> Result<()> {
    pack(buf, value)
}

pub fn unpack_int<B: Buf>(buf: &mut B) -> Result<i32> {
    unpack(buf)
}

pub fn pack_long<B: BufMut>(buf: &mut B, value: i64) -> Result<()> {
    pack(buf, value)
}

pub fn unpack_long<B: Buf>(buf: &mut B) -> Result<i64> {
    unpack(buf)
}

pub fn pack_float<B: BufMut>(buf: &mut B, value: f32) -> Result<()> {
    pack(buf, value)
}

pub fn unpack_float<B: Buf>(buf: &mut B) -> Result<f32> {
    unpack(buf)
}

pub fn pack_double<B: BufMut>(buf: &mut B, value: f64) -> Result<()> {
    pack(buf, value)
}

pub fn unpack_double<B: Buf>(buf: &mut B) -> Result<f64> {
    unpack(buf)
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::*;
    use crate::error::CodecError;

    fn packed<T: Scalar>(value: T) -> Vec<u8> {
        let mut buf = Vec::new();
        pack(&mut buf, value).unwrap();
        buf
    }

    #[test]
    fn int_one_is_little_endian() {
        assert_eq!(packed(1i32), [0x01, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn int_minus_one_is_all_ones() {
        assert_eq!(packed(-1i32), [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn long_one_is_little_endian() {
        assert_eq!(packed(1i64), [0x01, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn double_one_matches_ieee754() {
        assert_eq!(packed(1.0f64), [0, 0, 0, 0, 0, 0, 0xf0, 0x3f]);
    }

    #[test]
    fn float_one_matches_ieee754() {
        assert_eq!(packed(1.0f32), [0x00, 0x00, 0x80, 0x3f]);
    }

    #[test]
    fn int_extremes_roundtrip() {
        let mut buf = BytesMut::new();
        pack_int(&mut buf, i32::MIN).unwrap();
        pack_int(&mut buf, i32::MAX).unwrap();
        pack_long(&mut buf, i64::MIN).unwrap();
        pack_long(&mut buf, i64::MAX).unwrap();

        assert_eq!(unpack_int(&mut buf).unwrap(), i32::MIN);
        assert_eq!(unpack_int(&mut buf).unwrap(), i32::MAX);
        assert_eq!(unpack_long(&mut buf).unwrap(), i64::MIN);
        assert_eq!(unpack_long(&mut buf).unwrap(), i64::MAX);
        assert!(buf.is_empty());
    }

    #[test]
    fn float_specials_keep_their_bits() {
        let singles = [
            0.0f32,
            -0.0,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            f32::from_bits(1),
            f32::MAX,
        ];
        let doubles = [
            0.0f64,
            -0.0,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
            f64::from_bits(1),
            f64::MAX,
        ];

        let mut buf = BytesMut::new();
        for v in singles {
            pack_float(&mut buf, v).unwrap();
        }
        for v in doubles {
            pack_double(&mut buf, v).unwrap();
        }

        for v in singles {
            assert_eq!(unpack_float(&mut buf).unwrap().to_bits(), v.to_bits());
        }
        for v in doubles {
            assert_eq!(unpack_double(&mut buf).unwrap().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn pack_into_full_slice_fails_without_writing() {
        let mut storage = [0xAAu8; 6];
        let mut sink: &mut [u8] = &mut storage;

        pack_int(&mut sink, 7).unwrap();
        let err = pack_long(&mut sink, 7).unwrap_err();

        assert_eq!(
            err,
            CodecError::BufferCapacity {
                needed: 8,
                available: 2
            }
        );
        assert_eq!(sink.len(), 2);
        assert_eq!(storage, [7, 0, 0, 0, 0xAA, 0xAA]);
    }

    #[test]
    fn unpack_short_source_underflows() {
        let mut src: &[u8] = &[1, 2, 3];
        let err = unpack_int(&mut src).unwrap_err();
        assert_eq!(
            err,
            CodecError::BufferUnderflow {
                needed: 4,
                remaining: 3
            }
        );
        assert_eq!(src.len(), 3);
    }

    #[test]
    fn cursor_advances_by_width() {
        let mut src: &[u8] = &[1, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 9];
        assert_eq!(unpack::<i32, _>(&mut src).unwrap(), 1);
        assert_eq!(src.len(), 9);
        assert_eq!(unpack::<i64, _>(&mut src).unwrap(), 2);
        assert_eq!(src, &[9]);
    }

    #[test]
    fn wire_type_tags() {
        assert_eq!(<i32 as Scalar>::WIRE_TYPE, WireType::Int32);
        assert_eq!(<f64 as Scalar>::WIRE_TYPE, WireType::Float64);
    }
}
