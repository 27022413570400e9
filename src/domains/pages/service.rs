//! Page service implementation.
//!
//! The PageService owns the page templates and renders the portal page, its
//! notices and the built-in tool pages.

use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PageError;
use super::definitions::{
    IndexPage, NoticeFragment, PageDefinition, PdfCompressorPage, ToolRowFragment,
};
use super::portal::{Notice, tool_row_context};
use super::registry::get_all_pages;
use super::templates::{PageContext, PageTemplate, escape_html};
use crate::core::config::PortalConfig;
use crate::domains::compress::CompressionLevel;
use crate::domains::tools::ToolRegistry;
use crate::domains::tools::definitions::PdfCompressorTool;

/// Service for rendering pages.
#[derive(Debug, Clone)]
pub struct PageService {
    /// Portal title and tagline.
    config: PortalConfig,

    /// Registered templates by name.
    templates: HashMap<String, PageTemplate>,
}

impl PageService {
    /// Create a new PageService with the given configuration.
    pub fn new(config: PortalConfig) -> Self {
        info!("Initializing PageService");

        let templates = get_all_pages()
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect();

        Self { config, templates }
    }

    /// List all registered page names.
    pub fn page_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Render a page by name.
    pub fn render(&self, name: &str, context: &PageContext) -> Result<String, PageError> {
        debug!("Rendering page: {}", name);
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| PageError::not_found(name))?;
        template.render(context)
    }

    /// Render the portal page, optionally with a notice banner.
    ///
    /// Row links stay relative to the page, as written in the registry.
    pub fn render_portal(
        &self,
        registry: &ToolRegistry,
        notice: Option<&Notice>,
    ) -> Result<String, PageError> {
        self.render_portal_with_base(registry, notice, None)
    }

    /// Render the portal page with a `<base href>` when `base` is given.
    ///
    /// A server showing the portal under another path (a notice at
    /// `/open/{id}`, a missing page) passes `/` so row links still resolve
    /// against the site root.
    pub fn render_portal_with_base(
        &self,
        registry: &ToolRegistry,
        notice: Option<&Notice>,
        base: Option<&str>,
    ) -> Result<String, PageError> {
        let rows = registry
            .list()
            .iter()
            .map(|tool| self.render(ToolRowFragment::NAME, &tool_row_context(tool)))
            .collect::<Result<String, _>>()?;

        let notice = match notice {
            Some(notice) => self.render(NoticeFragment::NAME, &notice.context())?,
            None => String::new(),
        };

        let mut context = self.base_context();
        context.insert("rows".to_string(), rows);
        context.insert("notice".to_string(), notice);
        if let Some(base) = base {
            context.insert("base".to_string(), base.to_string());
        }

        self.render(IndexPage::NAME, &context)
    }

    /// Render the PDF compressor page with `default_level` preselected.
    pub fn render_pdf_compressor(&self, default_level: CompressionLevel) -> Result<String, PageError> {
        self.pdf_compressor_page(default_level, false)
    }

    fn pdf_compressor_page(
        &self,
        default_level: CompressionLevel,
        exported: bool,
    ) -> Result<String, PageError> {
        let level_options: String = CompressionLevel::ALL
            .iter()
            .map(|level| {
                let selected = if *level == default_level { " selected" } else { "" };
                format!(
                    "<option value=\"{}\"{}>{} - {}</option>\n",
                    level.value(),
                    selected,
                    level.value(),
                    escape_html(level.label())
                )
            })
            .collect();

        let mut context = self.base_context();
        context.insert("action".to_string(), PdfCompressorTool::FORM_ACTION.to_string());
        context.insert("level_options".to_string(), level_options);
        if exported {
            context.insert("static_export".to_string(), "true".to_string());
        }

        self.render(PdfCompressorPage::NAME, &context)
    }

    /// Render the built-in page served at `href`, if there is one.
    pub fn render_builtin(
        &self,
        href: &str,
        default_level: CompressionLevel,
    ) -> Option<Result<String, PageError>> {
        self.builtin_page(href, default_level, false)
    }

    /// Render the built-in page at `href` for the static export.
    ///
    /// Exported pages say that their form only works behind `serve`.
    pub fn render_exported_builtin(
        &self,
        href: &str,
        default_level: CompressionLevel,
    ) -> Option<Result<String, PageError>> {
        self.builtin_page(href, default_level, true)
    }

    fn builtin_page(
        &self,
        href: &str,
        default_level: CompressionLevel,
        exported: bool,
    ) -> Option<Result<String, PageError>> {
        match href {
            PdfCompressorTool::PAGE => Some(self.pdf_compressor_page(default_level, exported)),
            _ => None,
        }
    }

    fn base_context(&self) -> PageContext {
        let mut context = PageContext::new();
        context.insert("title".to_string(), self.config.title.clone());
        if let Some(tagline) = &self.config.tagline {
            context.insert("tagline".to_string(), tagline.clone());
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{ToolDescriptor, ToolError};
    use pretty_assertions::assert_eq;

    fn service() -> PageService {
        PageService::new(PortalConfig {
            title: "My Tools".to_string(),
            tagline: Some("Small things that help".to_string()),
        })
    }

    fn registry(tools: Vec<ToolDescriptor>) -> ToolRegistry {
        ToolRegistry::from_descriptors(tools).unwrap()
    }

    #[test]
    fn test_single_available_tool_renders_one_link() {
        let registry = registry(vec![ToolDescriptor::available(
            "auto-reply",
            "Auto Reply Generator",
            "Generate replies",
            "tools/auto-reply-generator.html",
        )]);

        let html = service().render_portal(&registry, None).unwrap();

        assert_eq!(html.matches("<a ").count(), 1);
        assert_eq!(html.matches("<li class=\"tool").count(), 1);
        assert!(html.contains(
            r#"<a class="name" href="tools/auto-reply-generator.html">Auto Reply Generator</a>"#
        ));
        assert!(!html.contains("coming soon"));
    }

    #[test]
    fn test_planned_tool_is_inert() {
        let registry = registry(vec![ToolDescriptor::planned(
            "pdf-merge",
            "PDF Merge",
            "Merge PDF files",
        )]);

        let html = service().render_portal(&registry, None).unwrap();

        assert_eq!(html.matches("<a ").count(), 0);
        assert!(html.contains(r#"<li class="tool planned" id="tool-pdf-merge">"#));
        assert!(html.contains(r#"<span class="badge">coming soon</span>"#));
        assert!(html.contains(r#"aria-disabled="true""#));
    }

    #[test]
    fn test_rows_follow_registry_order() {
        let registry = registry(vec![
            ToolDescriptor::planned("second", "Zeta", "Listed first"),
            ToolDescriptor::available("first", "Alpha", "Listed second", "tools/a.html"),
        ]);

        let html = service().render_portal(&registry, None).unwrap();
        let zeta = html.find("Zeta").unwrap();
        let alpha = html.find("Alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_notice_and_list_render_together() {
        let registry = registry(vec![ToolDescriptor::available(
            "auto-reply",
            "Auto Reply Generator",
            "Generate replies",
            "tools/auto-reply-generator.html",
        )]);
        let notice = Notice::from_tool_error(&ToolError::not_found("missing-id"), &registry).unwrap();

        let html = service().render_portal(&registry, Some(&notice)).unwrap();

        assert!(html.contains(r#"<div class="notice not-found" role="status">"#));
        assert!(html.contains("missing-id"));
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn test_coming_soon_notice_uses_tool_name() {
        let registry = registry(vec![ToolDescriptor::planned("pdf-merge", "PDF Merge", "Merge")]);
        let notice =
            Notice::from_tool_error(&ToolError::unavailable("pdf-merge"), &registry).unwrap();
        assert_eq!(notice.message, "PDF Merge is coming soon.");
    }

    #[test]
    fn test_configuration_errors_have_no_notice() {
        let registry = registry(vec![]);
        let error = ToolError::DuplicateId("x".to_string());
        assert!(Notice::from_tool_error(&error, &registry).is_none());
    }

    #[test]
    fn test_empty_registry() {
        let html = service().render_portal(&registry(vec![]), None).unwrap();
        assert!(html.contains("No tools yet."));
    }

    #[test]
    fn test_title_and_names_are_escaped() {
        let service = PageService::new(PortalConfig {
            title: "<Tools>".to_string(),
            tagline: None,
        });
        let registry = registry(vec![ToolDescriptor::planned("x", "A & B", "C < D")]);
        let html = service.render_portal(&registry, None).unwrap();
        assert!(html.contains("<h1>&lt;Tools&gt;</h1>"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("C &lt; D"));
        assert!(!html.contains("class=\"tagline\""));
    }

    #[test]
    fn test_pdf_compressor_page_preselects_level() {
        let html = service().render_pdf_compressor(CompressionLevel::Ebook).unwrap();
        assert!(html.contains(r#"<option value="3" selected>"#));
        assert_eq!(html.matches(" selected>").count(), 1);
        assert!(html.contains(r#"action="pdf-compressor/compress""#));
    }

    #[test]
    fn test_render_builtin() {
        let service = service();
        assert!(service
            .render_builtin("tools/pdf-compressor.html", CompressionLevel::default())
            .is_some());
        assert!(service
            .render_builtin("tools/auto-reply-generator.html", CompressionLevel::default())
            .is_none());
    }

    #[test]
    fn test_exported_compressor_page_needs_server() {
        let service = service();
        let exported = service
            .render_exported_builtin("tools/pdf-compressor.html", CompressionLevel::default())
            .unwrap()
            .unwrap();
        assert!(exported.contains(r#"<p class="hint">"#));
        assert!(exported.contains("tools-portal serve"));

        let served = service.render_pdf_compressor(CompressionLevel::default()).unwrap();
        assert!(!served.contains(r#"<p class="hint">"#));
    }

    #[test]
    fn test_base_href_only_when_requested() {
        let registry = registry(vec![ToolDescriptor::available(
            "auto-reply",
            "Auto Reply Generator",
            "Generate replies",
            "tools/auto-reply-generator.html",
        )]);
        let service = service();

        let plain = service.render_portal(&registry, None).unwrap();
        assert!(!plain.contains("<base"));

        let served = service
            .render_portal_with_base(&registry, None, Some("/"))
            .unwrap();
        assert!(served.contains(r#"<base href="/">"#));
        assert!(served.contains(r#"href="tools/auto-reply-generator.html""#));
    }

    #[test]
    fn test_render_unknown_page() {
        let err = service().render("nope", &PageContext::new()).unwrap_err();
        assert!(matches!(err, PageError::NotFound(_)));
    }
}
