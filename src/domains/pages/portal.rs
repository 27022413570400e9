//! Portal page content: tool rows and notice banners.

use super::templates::PageContext;
use crate::domains::tools::{ToolDescriptor, ToolError, ToolRegistry};

/// Kind of notice shown above the tool list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// An unknown tool id was requested.
    NotFound,
    /// A planned tool was selected.
    ComingSoon,
}

impl NoticeKind {
    /// CSS class of the banner.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::NotFound => "not-found",
            Self::ComingSoon => "coming-soon",
        }
    }
}

/// A visible, non-blocking message rendered on the portal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Notice for a tool id that is not registered.
    pub fn not_found(id: &str) -> Self {
        Self {
            kind: NoticeKind::NotFound,
            message: format!("There is no tool called \"{}\".", id),
        }
    }

    /// Notice for a path that does not exist on the site.
    pub fn page_not_found(path: &str) -> Self {
        Self {
            kind: NoticeKind::NotFound,
            message: format!("The page \"{}\" does not exist.", path),
        }
    }

    /// Notice for a tool that is announced but not built yet.
    pub fn coming_soon(name: &str) -> Self {
        Self {
            kind: NoticeKind::ComingSoon,
            message: format!("{} is coming soon.", name),
        }
    }

    /// Notice for a navigation error returned by the router.
    ///
    /// Returns `None` for configuration errors, which are never shown to
    /// visitors.
    pub fn from_tool_error(error: &ToolError, registry: &ToolRegistry) -> Option<Self> {
        match error {
            ToolError::NotFound(id) => Some(Self::not_found(id)),
            ToolError::Unavailable(id) => {
                let name = registry.get(id).map(|t| t.name.as_str()).unwrap_or(id);
                Some(Self::coming_soon(name))
            }
            _ => None,
        }
    }

    pub(super) fn context(&self) -> PageContext {
        PageContext::from([
            ("kind".to_string(), self.kind.css_class().to_string()),
            ("message".to_string(), self.message.clone()),
        ])
    }
}

/// Template context of one tool row.
///
/// Only clickable tools get an `href`, so a planned entry can never render
/// as a link even if its descriptor carries one.
pub(super) fn tool_row_context(tool: &ToolDescriptor) -> PageContext {
    let mut context = PageContext::from([
        ("id".to_string(), tool.id.clone()),
        ("name".to_string(), tool.name.clone()),
        ("description".to_string(), tool.description.clone()),
    ]);
    if tool.is_clickable() {
        if let Some(href) = &tool.href {
            context.insert("href".to_string(), href.clone());
        }
    }
    context
}
