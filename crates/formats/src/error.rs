//! Error types for record readers and writers

use thiserror::Error;

/// Record I/O errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file: {0}")]
    InvalidFile(String),
}

/// Result type alias for record I/O operations
pub type Result<T> = std::result::Result<T, Error>;
