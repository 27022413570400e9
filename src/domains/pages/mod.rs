//! Pages domain module.
//!
//! Renders the portal page (tool list plus optional notice), the built-in
//! tool pages, and the static export of the whole site.
//!
//! ## Architecture
//!
//! - `definitions/` - Page templates (one file per page or fragment)
//! - `templates.rs` - The small template language and HTML escaping
//! - `registry.rs` - Central page registration
//! - `portal.rs` - Notices and tool row contexts
//! - `service.rs` - `PageService` rendering pages
//! - `site.rs` - Static export and link checking

pub mod definitions;
mod error;
mod portal;
mod registry;
mod service;
mod site;
mod templates;

pub use error::PageError;
pub use portal::{Notice, NoticeKind};
pub use registry::{get_all_pages, page_names};
pub use service::PageService;
pub use site::{
    BUILTIN_PAGES, ExportReport, LinkProblem, check_site_links, export_site, is_builtin_page,
};
pub use templates::{PageContext, PageTemplate, escape_html};
