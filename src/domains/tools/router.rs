//! Tool Router - resolves a tool id to the page it should navigate to.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::descriptor::ToolStatus;
use super::error::ToolError;
use super::registry::ToolRegistry;

/// Where a successful `open` leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Id of the opened tool.
    pub id: String,

    /// Display name of the opened tool.
    pub name: String,

    /// Relative path of the tool's page.
    pub href: String,
}

/// Resolves tool ids against a shared registry.
#[derive(Debug, Clone)]
pub struct ToolRouter {
    registry: Arc<ToolRegistry>,
}

impl ToolRouter {
    /// Create a router over the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this router resolves against.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Resolve `id` to a navigation target.
    ///
    /// Fails with [`ToolError::NotFound`] for unknown ids and with
    /// [`ToolError::Unavailable`] for planned tools. Both are meant to be
    /// rendered as a notice on the portal page.
    #[instrument(skip(self))]
    pub fn open(&self, id: &str) -> Result<Navigation, ToolError> {
        let Some(tool) = self.registry.get(id) else {
            warn!("Requested unknown tool: {}", id);
            return Err(ToolError::not_found(id));
        };

        match (tool.status, tool.href.as_deref()) {
            (ToolStatus::Available, Some(href)) => {
                info!("Opening tool {} at {}", tool.id, href);
                Ok(Navigation {
                    id: tool.id.clone(),
                    name: tool.name.clone(),
                    href: href.to_string(),
                })
            }
            _ => {
                info!("Tool {} is not available yet", tool.id);
                Err(ToolError::unavailable(&tool.id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolDescriptor;

    fn test_router() -> ToolRouter {
        let registry = ToolRegistry::from_descriptors(vec![
            ToolDescriptor::available(
                "auto-reply",
                "Auto Reply Generator",
                "Generate replies",
                "tools/auto-reply-generator.html",
            ),
            ToolDescriptor::planned("pdf-merge", "PDF Merge", "Merge PDF files"),
        ])
        .unwrap();
        ToolRouter::new(Arc::new(registry))
    }

    #[test]
    fn test_open_available_tool() {
        let nav = test_router().open("auto-reply").unwrap();
        assert_eq!(nav.href, "tools/auto-reply-generator.html");
        assert_eq!(nav.name, "Auto Reply Generator");
    }

    #[test]
    fn test_open_planned_tool() {
        let err = test_router().open("pdf-merge").unwrap_err();
        assert!(matches!(err, ToolError::Unavailable(id) if id == "pdf-merge"));
    }

    #[test]
    fn test_open_missing_tool() {
        let err = test_router().open("missing-id").unwrap_err();
        assert!(matches!(err, ToolError::NotFound(ref id) if id == "missing-id"));
        assert!(err.is_navigation());
    }
}
