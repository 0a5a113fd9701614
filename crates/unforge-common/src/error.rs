//! Error types for unforge-common.

use thiserror::Error;

/// Common error type for unforge read operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer at offset {offset}: needed {needed} bytes but only {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Missing null terminator in string.
    #[error("string at offset {offset} missing null terminator")]
    MissingNullTerminator { offset: usize },

    /// UTF-8 decoding error.
    #[error("invalid UTF-8 in string at offset {offset}: {source}")]
    Utf8 {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
