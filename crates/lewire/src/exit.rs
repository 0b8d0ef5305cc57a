use std::fmt;

use lewire_codec::CodecError;

// Exit codes follow the sysexits-style scheme used across our CLIs.
pub const SUCCESS: i32 = 0;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    match err {
        CodecError::BufferUnderflow { .. }
        | CodecError::LengthOverflow { .. }
        | CodecError::InvalidUtf8(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        CodecError::BufferCapacity { .. } => CliError::new(INTERNAL, format!("{context}: {err}")),
    }
}

pub fn hex_error(context: &str, err: hex::FromHexError) -> CliError {
    CliError::new(DATA_INVALID, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_are_data_invalid() {
        let err = codec_error(
            "unpack failed",
            CodecError::LengthOverflow { len: 9_999_999_999 },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(
            err.to_string(),
            "unpack failed: String length too large: 9999999999"
        );
    }

    #[test]
    fn capacity_errors_are_internal() {
        let err = codec_error(
            "pack failed",
            CodecError::BufferCapacity {
                needed: 8,
                available: 0,
            },
        );
        assert_eq!(err.code, INTERNAL);
    }
}
