//! Tools Portal Library
//!
//! A personal tools portal: a registry of tool descriptors, a router that
//! turns a tool selection into a navigation target, and the portal page
//! listing every tool. One tool, the PDF compressor, ships with the crate.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, path security, the portal server and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool descriptors, registry, manifest loading and the router
//!   - **pages**: Page templates, the portal page and the static export
//!   - **compress**: The Ghostscript-based PDF compressor
//!
//! # Example
//!
//! ```rust
//! use tools_portal::{Config, PortalServer};
//!
//! let server = PortalServer::new(Config::default()).unwrap();
//! let nav = server.open("auto-reply").unwrap();
//! assert_eq!(nav.href, "tools/auto-reply-generator.html");
//!
//! let page = server.render_portal(None).unwrap();
//! assert!(page.contains("PDF Compressor"));
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, PortalServer, Result};
