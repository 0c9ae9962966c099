//! Error types for the deduplication engines

use thiserror::Error;

/// Deduplication errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record error: {0}")]
    Format(#[from] seqdedup_formats::Error),

    #[error("duplicate type must be an int from 1 to 5, got {0}")]
    InvalidDuplicateType(u8),
}

/// Result type alias for deduplication operations
pub type Result<T> = std::result::Result<T, Error>;
