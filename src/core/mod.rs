//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the portal,
//! including error handling, configuration, the portal server and the
//! transport layer.

pub mod config;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{PathSecurityError, resolve_site_path, validate_href};
pub use server::PortalServer;
pub use transport::HttpConfig;

#[cfg(feature = "http")]
pub use transport::TransportService;
