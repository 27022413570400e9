//! Registry manifest loading.
//!
//! A manifest is a TOML file authored by the portal maintainer that replaces
//! the built-in tool definitions:
//!
//! ```toml
//! [[tools]]
//! id = "auto-reply"
//! name = "Auto Reply Generator"
//! description = "Generate ready-to-paste automatic reply messages"
//! status = "available"
//! href = "tools/auto-reply-generator.html"
//!
//! [[tools]]
//! id = "pdf-merge"
//! name = "PDF Merge"
//! description = "Merge several PDF files into one"
//! status = "planned"
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use super::descriptor::ToolDescriptor;
use super::error::ToolError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    tools: Vec<ToolDescriptor>,
}

/// Parse manifest text into descriptors, in declaration order.
///
/// Only the TOML shape is checked here; descriptor invariants are checked
/// when the registry is built.
pub fn parse_manifest(text: &str) -> Result<Vec<ToolDescriptor>, ToolError> {
    let manifest: Manifest = toml::from_str(text).map_err(|e| ToolError::manifest(e.to_string()))?;
    Ok(manifest.tools)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<ToolDescriptor>, ToolError> {
    info!("Loading registry manifest from {}", path.display());
    let text = std::fs::read_to_string(path)
        .map_err(|e| ToolError::manifest(format!("{}: {}", path.display(), e)))?;
    parse_manifest(&text)
}
