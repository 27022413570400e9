//! Configuration management for the tools portal.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally through a `.env` file)
//! or defaults. CLI flags override selected fields in `main`.

use super::transport::HttpConfig;
use crate::domains::compress::CompressionLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the tools portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Portal page texts.
    pub portal: PortalConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP server configuration.
    pub http: HttpConfig,

    /// Site files, export directory and registry manifest.
    pub site: SiteConfig,

    /// PDF compressor configuration.
    pub compression: CompressionConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported by `/health`.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Texts shown on the portal page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Page title and heading.
    pub title: String,

    /// Optional line under the heading.
    pub tagline: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Site layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory holding hand-authored tool pages, served under `/`.
    pub root: PathBuf,

    /// Directory written by the static export.
    pub output_dir: PathBuf,

    /// Optional TOML manifest replacing the built-in tool definitions.
    pub registry_path: Option<PathBuf>,

    /// Whether files reached through symlinks may be served.
    /// Targets must stay inside the site root either way.
    pub allow_symlinks: bool,
}

/// PDF compressor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// Explicit Ghostscript executable (path or name on `PATH`).
    pub ghostscript: Option<PathBuf>,

    /// Directory for uploaded and compressed files while a request runs.
    pub upload_dir: PathBuf,

    /// Level preselected in the web form and used by default.
    pub default_level: CompressionLevel,

    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            title: "Tools".to_string(),
            tagline: Some("Small browser-based utilities".to_string()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("site"),
            output_dir: PathBuf::from("dist"),
            registry_path: None,
            allow_symlinks: false,
        }
    }
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            ghostscript: None,
            upload_dir: std::env::temp_dir().join("tools-portal-uploads"),
            default_level: CompressionLevel::default(),
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tools-portal".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            portal: PortalConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            http: HttpConfig::default(),
            site: SiteConfig::default(),
            compression: CompressionConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `PORTAL_`.
    /// For example: `PORTAL_TITLE`, `PORTAL_LOG_LEVEL`, `PORTAL_SITE_ROOT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("PORTAL_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(title) = std::env::var("PORTAL_TITLE") {
            config.portal.title = title;
        }

        if let Ok(tagline) = std::env::var("PORTAL_TAGLINE") {
            config.portal.tagline = Some(tagline).filter(|t| !t.is_empty());
        }

        if let Ok(level) = std::env::var("PORTAL_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.http = HttpConfig::from_env();

        // Site layout
        if let Ok(root) = std::env::var("PORTAL_SITE_ROOT") {
            config.site.root = PathBuf::from(root);
        }

        if let Ok(output_dir) = std::env::var("PORTAL_OUTPUT_DIR") {
            config.site.output_dir = PathBuf::from(output_dir);
        }

        if let Ok(registry_path) = std::env::var("PORTAL_REGISTRY_PATH") {
            info!("Registry manifest set to {}", registry_path);
            config.site.registry_path = Some(PathBuf::from(registry_path));
        }

        if let Ok(allow_symlinks) = std::env::var("PORTAL_ALLOW_SYMLINKS") {
            config.site.allow_symlinks = allow_symlinks.parse().unwrap_or(false);
        }

        // PDF compressor
        if let Ok(gs) = std::env::var("PORTAL_GHOSTSCRIPT") {
            config.compression.ghostscript = Some(PathBuf::from(gs));
        }

        if let Ok(upload_dir) = std::env::var("PORTAL_UPLOAD_DIR") {
            config.compression.upload_dir = PathBuf::from(upload_dir);
        }

        if let Ok(level) = std::env::var("PORTAL_COMPRESSION_LEVEL") {
            match level.parse() {
                Ok(level) => config.compression.default_level = level,
                Err(e) => warn!("Ignoring PORTAL_COMPRESSION_LEVEL: {}", e),
            }
        }

        if let Ok(max_mb) = std::env::var("PORTAL_MAX_UPLOAD_MB") {
            match max_mb.parse::<usize>() {
                Ok(mb) => config.compression.max_upload_bytes = mb * 1024 * 1024,
                Err(_) => warn!("Ignoring invalid PORTAL_MAX_UPLOAD_MB: {}", max_mb),
            }
        }

        config
    }
}
