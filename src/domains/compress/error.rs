//! Compression-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compressing a PDF.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The input file does not exist or is not a regular file.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// No Ghostscript executable could be located.
    #[error("Ghostscript not found (tried: {tried})")]
    GhostscriptNotFound { tried: String },

    /// Ghostscript ran but reported a failure.
    #[error("Ghostscript failed with exit code {code}: {stderr}")]
    GhostscriptFailed { code: i32, stderr: String },

    /// The requested compression level is outside 0-4.
    #[error("Invalid compression level: {0} (expected 0-4)")]
    InvalidLevel(String),

    /// I/O error while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompressError {
    /// Create a new "invalid level" error.
    pub fn invalid_level(value: impl Into<String>) -> Self {
        Self::InvalidLevel(value.into())
    }
}
