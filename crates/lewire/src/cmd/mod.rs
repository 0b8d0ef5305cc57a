use std::fmt;
use std::str::FromStr;

use clap::{Args, Subcommand};
use lewire_codec::{Packer, WireType};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod legacy;
pub mod pack;
pub mod unpack;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pack typed values and print the encoded bytes.
    Pack(PackArgs),
    /// Unpack hex-encoded bytes with a type layout.
    Unpack(UnpackArgs),
    /// Encode text with the legacy 32-bit length prefix.
    Legacy(LegacyArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Pack(args) => pack::run(args, format),
        Command::Unpack(args) => unpack::run(args, format),
        Command::Legacy(args) => legacy::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Values to pack, in order: int:N, long:N, float:X, double:X, string:TEXT or null.
    #[arg(required = true, value_name = "VALUE")]
    pub values: Vec<Value>,
}

#[derive(Args, Debug)]
pub struct UnpackArgs {
    /// Comma-separated value types, in wire order (int, long, float, double, string).
    #[arg(long, short = 'l', value_delimiter = ',', required = true)]
    pub layout: Vec<WireType>,
    /// Reject text that is not valid UTF-8 instead of substituting U+FFFD.
    #[arg(long)]
    pub strict_utf8: bool,
    /// Largest accepted text length in bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_text_len: Option<usize>,
    /// Hex-encoded input; several arguments are concatenated.
    #[arg(required = true, value_name = "HEX")]
    pub hex: Vec<String>,
}

#[derive(Args, Debug)]
pub struct LegacyArgs {
    /// Text to encode. Omit to encode an absent string.
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// A typed value given on the command line as `TYPE:VALUE`, or `null` for
/// absent text.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Text(Option<String>),
}

impl Value {
    pub fn wire_type(&self) -> WireType {
        match self {
            Value::Int(_) => WireType::Int32,
            Value::Long(_) => WireType::Int64,
            Value::Float(_) => WireType::Float32,
            Value::Double(_) => WireType::Float64,
            Value::Text(_) => WireType::Text,
        }
    }

    pub fn pack_into<B: bytes::BufMut>(&self, packer: &mut Packer<B>) -> lewire_codec::Result<()> {
        match self {
            Value::Int(v) => packer.int(*v)?,
            Value::Long(v) => packer.long(*v)?,
            Value::Float(v) => packer.float(*v)?,
            Value::Double(v) => packer.double(*v)?,
            Value::Text(v) => packer.string(v.as_deref())?,
        };
        Ok(())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Double(v) => write!(f, "{v:?}"),
            Value::Text(Some(v)) => f.write_str(v),
            Value::Text(None) => f.write_str("null"),
        }
    }
}

impl FromStr for Value {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token == "null" {
            return Ok(Value::Text(None));
        }

        let (kind, raw) = token
            .split_once(':')
            .ok_or_else(|| format!("expected TYPE:VALUE or null, got '{token}'"))?;
        let wire_type: WireType = kind.parse().map_err(|err| format!("{err}"))?;
        let invalid = |err: &dyn fmt::Display| format!("invalid {wire_type} value '{raw}': {err}");

        match wire_type {
            WireType::Int32 => raw.parse().map(Value::Int).map_err(|e| invalid(&e)),
            WireType::Int64 => raw.parse().map(Value::Long).map_err(|e| invalid(&e)),
            WireType::Float32 => raw.parse().map(Value::Float).map_err(|e| invalid(&e)),
            WireType::Float64 => raw.parse().map(Value::Double).map_err(|e| invalid(&e)),
            WireType::Text => Ok(Value::Text(Some(raw.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_kind() {
        assert_eq!("int:-1".parse::<Value>().unwrap(), Value::Int(-1));
        assert_eq!(
            "long:9223372036854775807".parse::<Value>().unwrap(),
            Value::Long(i64::MAX)
        );
        assert_eq!("float:1.5".parse::<Value>().unwrap(), Value::Float(1.5));
        assert_eq!("double:-0.25".parse::<Value>().unwrap(), Value::Double(-0.25));
        assert_eq!(
            "string:a:b".parse::<Value>().unwrap(),
            Value::Text(Some("a:b".to_string()))
        );
        assert_eq!(
            "string:".parse::<Value>().unwrap(),
            Value::Text(Some(String::new()))
        );
        assert_eq!("null".parse::<Value>().unwrap(), Value::Text(None));
    }

    #[test]
    fn float_tokens_accept_non_finite() {
        let Value::Double(v) = "double:NaN".parse::<Value>().unwrap() else {
            panic!("expected double");
        };
        assert!(v.is_nan());
        assert_eq!(
            "float:-inf".parse::<Value>().unwrap(),
            Value::Float(f32::NEG_INFINITY)
        );
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!("42".parse::<Value>().is_err());
        assert!("int:4294967296".parse::<Value>().is_err());
        let err = "long:abc".parse::<Value>().unwrap_err();
        assert!(err.starts_with("invalid long value 'abc'"), "{err}");
    }

    #[test]
    fn display_marks_absent_text() {
        assert_eq!(Value::Text(None).to_string(), "null");
        assert_eq!(Value::Double(1.0).to_string(), "1.0");
    }
}
