//! Little-endian wire marshalling for scalars and length-prefixed text.
//!
//! lewire encodes `int32`, `int64`, `float32`, `float64` and UTF-8 text into
//! caller-owned byte buffers using a fixed little-endian layout, for use by
//! higher-level message framing.
//!
//! # Crate Structure
//!
//! - [`codec`]: scalar and text codecs, cursor wrappers, configuration
//!
//! The `lewire` command-line tool (behind the `cli` feature) packs and
//! unpacks values as hex from the shell.

/// Re-export codec types.
pub mod codec {
    pub use lewire_codec::*;
}
