//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while building or navigating the tool registry.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A registry entry violates a descriptor invariant.
    ///
    /// This is an authoring problem: it is reported when the registry is
    /// built and never rendered to portal visitors.
    #[error("Invalid tool entry '{id}': {reason}")]
    Configuration { id: String, reason: String },

    /// Two registry entries share the same id.
    #[error("Duplicate tool id: {0}")]
    DuplicateId(String),

    /// The registry manifest could not be read or parsed.
    #[error("Invalid registry manifest: {0}")]
    Manifest(String),

    /// The requested tool id is not in the registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The requested tool is planned but not built yet.
    #[error("Tool '{0}' is not available yet")]
    Unavailable(String),
}

impl ToolError {
    /// Create a new configuration error for the entry `id`.
    pub fn configuration(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a new "unavailable" error.
    pub fn unavailable(id: impl Into<String>) -> Self {
        Self::Unavailable(id.into())
    }

    /// Create a new manifest error.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Whether this error is a navigation outcome shown to visitors,
    /// as opposed to an authoring problem.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Unavailable(_))
    }
}
