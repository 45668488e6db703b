//! Error types for tangle operations.
//!
//! Analysis itself is infallible: malformed references are excluded rather
//! than rejected and a missing `definitions` map means zero definitions.
//! The only fallible surface is parsing JSON text input.

use thiserror::Error;

/// The error type for tangle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input text was not valid JSON.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tangle operations.
pub type Result<T> = std::result::Result<T, Error>;
