//! Error types for the endeck library.

use thiserror::Error;

/// Result type alias for endeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during deck conversion.
///
/// Conversion itself never fails: unsupported input degrades to
/// "contributes nothing to the output" and is surfaced as a
/// [`Diagnostic`](crate::convert::Diagnostic). These errors cover the
/// API surface around the pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Conversion options failed validation.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Error serializing a model to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
