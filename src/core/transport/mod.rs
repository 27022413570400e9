//! Transport layer for the tools portal.
//!
//! The portal is served over HTTP (feature `http`, enabled by default).
//! Without the feature only the configuration and error types are built,
//! which is enough for the static export and the CLI.

mod config;
mod error;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
mod service;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "http")]
pub use service::TransportService;
