//! Error types for CryXmlB decoding and emission.

use thiserror::Error;

/// Errors that can occur when decoding a CryXmlB buffer or writing the
/// decoded tree.
#[derive(Debug, Error)]
pub enum Error {
    /// The first eight bytes are not `CryXmlB\0`.
    #[error("unrecognized signature: expected 'CryXmlB\\0', got {actual:?}")]
    InvalidSignature { actual: Vec<u8> },

    /// A table or string-pool read fell outside the buffer or hit bad UTF-8.
    #[error(transparent)]
    Read(#[from] unforge_common::Error),

    /// XML writing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON writing error.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type for CryXmlB operations.
pub type Result<T> = std::result::Result<T, Error>;
