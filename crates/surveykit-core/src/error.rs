//! Error handling for SurveyKit core
//!
//! Covers demo-plan loading, seeding, and store interaction failures.
//! Geometry and validation deliberately never error: degenerate
//! geometry degrades to safe defaults and malformed validation rules
//! degrade to "no constraint", so an interactive survey session is
//! never interrupted by bad reference data.
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Errors that can occur in SurveyKit core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A bundled resource file could not be found.
    #[error("Resource missing: {0}")]
    ResourceMissing(String),

    /// A JSON resource could not be decoded.
    #[error("Failed to decode {resource}: {source}")]
    DecodeFailed {
        /// The resource that failed to decode.
        resource: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Seed data was missing a required piece of content.
    #[error("Missing required data: {0}")]
    MissingRequiredData(String),

    /// The backing object store rejected an operation.
    #[error("Store error: {0}")]
    Store(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
