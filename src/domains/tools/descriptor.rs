//! Tool descriptor types and their invariants.

use serde::{Deserialize, Serialize};

use super::error::ToolError;
use crate::core::security::validate_href;

/// Availability of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    /// The tool is built and its page can be opened.
    Available,

    /// The tool is announced but not built yet.
    Planned,
}

impl ToolStatus {
    /// Human-readable label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Planned => "coming soon",
        }
    }
}

/// A single entry of the tool registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolDescriptor {
    /// Unique, stable identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// One-line summary.
    pub description: String,

    /// Relative path to the tool's page, absent while the tool is planned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Availability status.
    pub status: ToolStatus,
}

impl ToolDescriptor {
    /// Create a descriptor for a built tool.
    pub fn available(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            href: Some(href.into()),
            status: ToolStatus::Available,
        }
    }

    /// Create a descriptor for a tool that is not built yet.
    pub fn planned(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            href: None,
            status: ToolStatus::Planned,
        }
    }

    /// Whether the portal should render this entry as a link.
    pub fn is_clickable(&self) -> bool {
        self.status == ToolStatus::Available && self.href.is_some()
    }

    /// Check the per-entry invariants.
    ///
    /// Uniqueness of ids is a registry-level invariant and is checked by
    /// [`super::ToolRegistry::from_descriptors`].
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.id.trim().is_empty() {
            return Err(ToolError::configuration(&self.id, "id must not be empty"));
        }
        if self.id.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_')) {
            return Err(ToolError::configuration(
                &self.id,
                "id may only contain ASCII letters, digits, '-' and '_'",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(ToolError::configuration(&self.id, "name must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(ToolError::configuration(
                &self.id,
                "description must not be empty",
            ));
        }

        match (self.status, self.href.as_deref()) {
            (ToolStatus::Planned, Some(_)) => Err(ToolError::configuration(
                &self.id,
                "a planned tool must not have an href",
            )),
            (ToolStatus::Planned, None) => Ok(()),
            (ToolStatus::Available, None) => Err(ToolError::configuration(
                &self.id,
                "an available tool must have an href",
            )),
            (ToolStatus::Available, Some(href)) => validate_href(href)
                .map(|_| ())
                .map_err(|e| ToolError::configuration(&self.id, e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_descriptor_is_clickable() {
        let tool = ToolDescriptor::available(
            "auto-reply",
            "Auto Reply Generator",
            "Generate out-of-office replies",
            "tools/auto-reply-generator.html",
        );
        assert!(tool.is_clickable());
        assert!(tool.validate().is_ok());
    }

    #[test]
    fn test_planned_descriptor_is_not_clickable() {
        let tool = ToolDescriptor::planned("pdf-merge", "PDF Merge", "Merge PDF files");
        assert!(!tool.is_clickable());
        assert!(tool.validate().is_ok());
    }

    #[test]
    fn test_planned_with_href_is_rejected() {
        let mut tool = ToolDescriptor::planned("pdf-merge", "PDF Merge", "Merge PDF files");
        tool.href = Some("tools/merge.html".to_string());
        let err = tool.validate().unwrap_err();
        assert!(matches!(err, ToolError::Configuration { .. }));
    }

    #[test]
    fn test_available_without_href_is_rejected() {
        let mut tool = ToolDescriptor::available("x", "X", "Does x", "x.html");
        tool.href = None;
        assert!(tool.validate().is_err());
    }

    #[test]
    fn test_available_with_empty_or_absolute_href_is_rejected() {
        let empty = ToolDescriptor::available("x", "X", "Does x", "");
        assert!(empty.validate().is_err());

        let absolute = ToolDescriptor::available("x", "X", "Does x", "/etc/passwd");
        assert!(absolute.validate().is_err());

        let remote = ToolDescriptor::available("x", "X", "Does x", "https://example.com");
        assert!(remote.validate().is_err());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        assert!(ToolDescriptor::planned("", "X", "Does x").validate().is_err());
        assert!(ToolDescriptor::planned("x", " ", "Does x").validate().is_err());
        assert!(ToolDescriptor::planned("x", "X", "").validate().is_err());
        assert!(ToolDescriptor::planned("has space", "X", "Does x").validate().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_value(ToolStatus::Planned).unwrap();
        assert_eq!(json, serde_json::json!("planned"));
    }
}
