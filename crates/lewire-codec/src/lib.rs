//! Little-endian marshalling of scalars and length-prefixed text.
//!
//! Every value is written to, or read from, a caller-owned `bytes` buffer:
//! - `int32` / `int64`: two's complement, 4 / 8 bytes
//! - `float32` / `float64`: IEEE-754, 4 / 8 bytes, bit-exact
//! - text: 8-byte signed length prefix followed by the UTF-8 bytes
//!
//! All multi-byte values are little-endian. The codec holds no state; a
//! buffer must only be used by one writer or one reader at a time.

pub mod config;
pub mod error;
pub mod legacy;
pub mod packer;
pub mod scalar;
pub mod text;
pub mod unpacker;
pub mod wire;

pub use config::{CodecConfig, Utf8Policy};
pub use error::{CodecError, Result};
pub use legacy::pack_string_legacy;
pub use packer::Packer;
pub use scalar::{
    pack, pack_double, pack_float, pack_int, pack_long, unpack, unpack_double, unpack_float,
    unpack_int, unpack_long, Scalar,
};
pub use text::{pack_string, text_wire_size, unpack_string, unpack_string_with};
pub use unpacker::Unpacker;
pub use wire::{UnknownWireType, WireType, LEGACY_PREFIX_SIZE, MAX_TEXT_LEN, TEXT_PREFIX_SIZE};
