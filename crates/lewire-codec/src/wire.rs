//! Wire widths and the fixed byte-order policy.
//!
//! Every multi-byte value is encoded least-significant byte first. There is
//! no way to select another byte order.

use std::fmt;
use std::str::FromStr;

/// Width of an `int32` / `float32` on the wire.
pub const WIDTH_32: usize = 4;

/// Width of an `int64` / `float64` on the wire.
pub const WIDTH_64: usize = 8;

/// Length prefix of primary text: a signed 64-bit byte count.
pub const TEXT_PREFIX_SIZE: usize = WIDTH_64;

/// Length prefix of legacy text: a signed 32-bit byte count.
pub const LEGACY_PREFIX_SIZE: usize = WIDTH_32;

/// Largest text length a decoder accepts (`2^31 - 1`).
pub const MAX_TEXT_LEN: usize = i32::MAX as usize;

/// The value kinds the codec knows how to marshal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Int32,
    Int64,
    Float32,
    Float64,
    Text,
}

impl WireType {
    /// Short lower-case name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            WireType::Int32 => "int",
            WireType::Int64 => "long",
            WireType::Float32 => "float",
            WireType::Float64 => "double",
            WireType::Text => "string",
        }
    }

    /// Encoded width for scalars, `None` for text.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            WireType::Int32 | WireType::Float32 => Some(WIDTH_32),
            WireType::Int64 | WireType::Float64 => Some(WIDTH_64),
            WireType::Text => None,
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a type name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wire type '{0}' (expected int, long, float, double or string)")]
pub struct UnknownWireType(pub String);

impl FromStr for WireType {
    type Err = UnknownWireType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "int32" | "i32" => Ok(WireType::Int32),
            "long" | "int64" | "i64" => Ok(WireType::Int64),
            "float" | "float32" | "f32" => Ok(WireType::Float32),
            "double" | "float64" | "f64" => Ok(WireType::Float64),
            "string" | "text" | "str" => Ok(WireType::Text),
            _ => Err(UnknownWireType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sizes() {
        assert_eq!(WireType::Int32.fixed_size(), Some(4));
        assert_eq!(WireType::Int64.fixed_size(), Some(8));
        assert_eq!(WireType::Float32.fixed_size(), Some(4));
        assert_eq!(WireType::Float64.fixed_size(), Some(8));
        assert_eq!(WireType::Text.fixed_size(), None);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("int".parse::<WireType>().unwrap(), WireType::Int32);
        assert_eq!(" I64 ".parse::<WireType>().unwrap(), WireType::Int64);
        assert_eq!("f32".parse::<WireType>().unwrap(), WireType::Float32);
        assert_eq!("double".parse::<WireType>().unwrap(), WireType::Float64);
        assert_eq!("text".parse::<WireType>().unwrap(), WireType::Text);
        assert!("uint".parse::<WireType>().is_err());
    }

    #[test]
    fn name_roundtrips_through_parse() {
        for ty in [
            WireType::Int32,
            WireType::Int64,
            WireType::Float32,
            WireType::Float64,
            WireType::Text,
        ] {
            assert_eq!(ty.name().parse::<WireType>().unwrap(), ty);
        }
    }

    #[test]
    fn max_text_len_is_i32_max() {
        assert_eq!(MAX_TEXT_LEN, 2_147_483_647);
    }
}
