use crate::wire::MAX_TEXT_LEN;

/// How text payloads that are not valid UTF-8 are decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Utf8Policy {
    /// Replace invalid sequences with U+FFFD.
    #[default]
    Lossy,
    /// Reject the payload with `CodecError::InvalidUtf8`.
    Strict,
}

/// Configuration for text decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Invalid UTF-8 handling. Default: lossy.
    pub utf8: Utf8Policy,
    /// Largest accepted text length in bytes. Default and ceiling: `2^31 - 1`.
    pub max_text_len: usize,
}

impl CodecConfig {
    /// Default limits with strict UTF-8 validation.
    pub fn strict() -> Self {
        Self {
            utf8: Utf8Policy::Strict,
            ..Self::default()
        }
    }

    /// Length limit actually enforced, never above `MAX_TEXT_LEN`.
    pub fn effective_max_text_len(&self) -> usize {
        self.max_text_len.min(MAX_TEXT_LEN)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            utf8: Utf8Policy::Lossy,
            max_text_len: MAX_TEXT_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lossy_with_i32_limit() {
        let config = CodecConfig::default();
        assert_eq!(config.utf8, Utf8Policy::Lossy);
        assert_eq!(config.effective_max_text_len(), MAX_TEXT_LEN);
    }

    #[test]
    fn oversized_limit_is_clamped() {
        let config = CodecConfig {
            max_text_len: usize::MAX,
            ..CodecConfig::default()
        };
        assert_eq!(config.effective_max_text_len(), MAX_TEXT_LEN);
    }

    #[test]
    fn strict_keeps_default_limit() {
        let config = CodecConfig::strict();
        assert_eq!(config.utf8, Utf8Policy::Strict);
        assert_eq!(config.max_text_len, MAX_TEXT_LEN);
    }
}
