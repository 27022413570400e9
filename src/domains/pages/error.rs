//! Page-specific error types.

use thiserror::Error;

/// Errors that can occur while rendering or exporting pages.
#[derive(Debug, Error)]
pub enum PageError {
    /// The requested page template was not found.
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Template parsing or rendering failed.
    #[error("Template error in '{page}': {message}")]
    Template { page: String, message: String },

    /// The exported portal would link to pages that were not exported.
    #[error("Exported portal links to missing pages: {}", .0.join(", "))]
    MissingPages(Vec<String>),

    /// An I/O error occurred while writing exported pages.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PageError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "template" error.
    pub fn template(page: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            page: page.into(),
            message: message.into(),
        }
    }
}
