//! Portal server implementation.
//!
//! This module contains the `PortalServer` that ties the domain services
//! together: the tool registry and router, the page service, and the PDF
//! compressor. Transports and the CLI only talk to this type.

use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::{
    compress::CompressionService,
    pages::{Notice, PageService},
    tools::{Navigation, ToolRegistry, ToolRouter},
};

/// The main portal handler.
///
/// Cheap to clone: every service is shared behind an `Arc` and none of them
/// holds mutable state.
#[derive(Clone)]
pub struct PortalServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Router over the shared, read-only tool registry.
    router: ToolRouter,

    /// Service rendering the portal and built-in pages.
    page_service: Arc<PageService>,

    /// Service running PDF compression jobs.
    compression_service: Arc<CompressionService>,
}

impl PortalServer {
    /// Create a portal server, loading the registry named by the configuration.
    ///
    /// Fails if the registry manifest is missing or any entry is malformed.
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::load(config.site.registry_path.as_deref())?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a portal server over an already validated registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        let config = Arc::new(config);

        let page_service = Arc::new(PageService::new(config.portal.clone()));
        let compression_service = Arc::new(CompressionService::new(config.compression.clone()));

        Self {
            router: ToolRouter::new(Arc::new(registry)),
            config,
            page_service,
            compression_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        self.router.registry()
    }

    /// The page service.
    pub fn pages(&self) -> &PageService {
        &self.page_service
    }

    /// The PDF compression service.
    pub fn compression(&self) -> &CompressionService {
        &self.compression_service
    }

    /// List all tools as JSON objects.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry()
            .list()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "id": t.id,
                    "name": t.name,
                    "description": t.description,
                    "href": t.href,
                    "status": t.status,
                })
            })
            .collect()
    }

    /// Render the portal page with an optional notice.
    pub fn render_portal(&self, notice: Option<&Notice>) -> Result<String> {
        Ok(self.page_service.render_portal(self.registry(), notice)?)
    }

    /// Render the portal page for HTTP responses.
    ///
    /// The page carries `<base href="/">`, so its relative row links resolve
    /// from the site root whatever path it is served under.
    pub fn render_served_portal(&self, notice: Option<&Notice>) -> Result<String> {
        Ok(self
            .page_service
            .render_portal_with_base(self.registry(), notice, Some("/"))?)
    }

    /// Resolve a tool selection.
    ///
    /// Navigation failures come back as the notice to show on the portal page.
    #[instrument(skip(self))]
    pub fn open(&self, id: &str) -> std::result::Result<Navigation, Notice> {
        self.router.open(id).map_err(|e| {
            info!("Tool {} cannot be opened: {}", id, e);
            Notice::from_tool_error(&e, self.registry()).unwrap_or_else(|| Notice::not_found(id))
        })
    }

    /// Render the built-in page served at `href`, if any.
    pub fn render_builtin(&self, href: &str) -> Option<Result<String>> {
        self.page_service
            .render_builtin(href, self.config.compression.default_level)
            .map(|page| page.map_err(Into::into))
    }
}
