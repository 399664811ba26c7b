//! Error types for the stela import pipeline.
//!
//! All crates return `StelaResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the stela import pipeline.
#[derive(Debug, Error)]
pub enum StelaError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// STL byte stream is malformed or truncated.
    #[error("Invalid STL: {0}")]
    InvalidStl(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),
}

/// Convenience alias for `Result<T, StelaError>`.
pub type StelaResult<T> = Result<T, StelaError>;
