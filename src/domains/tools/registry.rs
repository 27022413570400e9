//! Tool Registry - the ordered, read-only list of tool descriptors.
//!
//! The registry is built once, either from the built-in definitions or from
//! a maintainer-authored manifest, and validated as a whole. It offers no
//! mutation afterwards.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use super::definitions::{AutoReplyTool, PdfCompressorTool, ToolDefinition};
use super::descriptor::{ToolDescriptor, ToolStatus};
use super::error::ToolError;
use super::manifest::load_manifest;

/// Get all built-in tool descriptors, in portal order.
///
/// This is the central place where built-in tools are registered.
/// When adding a new tool, add it here.
pub fn builtin_tools() -> Vec<ToolDescriptor> {
    vec![AutoReplyTool::descriptor(), PdfCompressorTool::descriptor()]
}

/// Ordered, validated collection of tool descriptors.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Build a registry, checking every descriptor and id uniqueness.
    pub fn from_descriptors(tools: Vec<ToolDescriptor>) -> Result<Self, ToolError> {
        let mut seen = HashSet::new();
        for tool in &tools {
            tool.validate()?;
            if !seen.insert(tool.id.as_str()) {
                return Err(ToolError::DuplicateId(tool.id.clone()));
            }
        }

        debug!("Registry built with {} tools", tools.len());
        Ok(Self { tools })
    }

    /// Registry made of the built-in tool definitions.
    pub fn builtin() -> Result<Self, ToolError> {
        Self::from_descriptors(builtin_tools())
    }

    /// Load the registry from a manifest if one is given, else the built-ins.
    pub fn load(manifest: Option<&Path>) -> Result<Self, ToolError> {
        let registry = match manifest {
            Some(path) => Self::from_descriptors(load_manifest(path)?)?,
            None => Self::builtin()?,
        };

        info!(
            "Registry loaded: {} tools ({} available)",
            registry.len(),
            registry.available().count()
        );
        Ok(registry)
    }

    /// All descriptors, in declaration order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Look up a descriptor by id.
    pub fn get(&self, id: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Descriptors that can be opened.
    pub fn available(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools
            .iter()
            .filter(|t| t.status == ToolStatus::Available)
    }

    /// All tool ids, in declaration order.
    pub fn ids(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.id.as_str()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_registry() {
        let registry = ToolRegistry::builtin().unwrap();
        assert_eq!(registry.ids(), vec!["auto-reply", "pdf-compressor"]);
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let tools = builtin_tools();
        let ids: HashSet<_> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tools.len());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let tools = vec![
            ToolDescriptor::planned("dup", "One", "First"),
            ToolDescriptor::planned("dup", "Two", "Second"),
        ];
        let err = ToolRegistry::from_descriptors(tools).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateId(id) if id == "dup"));
    }

    #[test]
    fn test_invalid_entry_is_rejected() {
        let mut bad = ToolDescriptor::planned("bad", "Bad", "Planned with link");
        bad.href = Some("tools/bad.html".to_string());
        assert!(ToolRegistry::from_descriptors(vec![bad]).is_err());
    }

    #[test]
    fn test_get_and_order() {
        let registry = ToolRegistry::from_descriptors(vec![
            ToolDescriptor::planned("z", "Zed", "Last letter"),
            ToolDescriptor::available("a", "Ay", "First letter", "tools/a.html"),
        ])
        .unwrap();
        assert_eq!(registry.ids(), vec!["z", "a"]);
        assert_eq!(registry.get("a").map(|t| t.name.as_str()), Some("Ay"));
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.available().count(), 1);
    }

    #[test]
    fn test_load_from_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[tools]]
id = "pdf-merge"
name = "PDF Merge"
description = "Merge PDF files"
status = "planned"
"#
        )
        .unwrap();

        let registry = ToolRegistry::load(Some(file.path())).unwrap();
        assert_eq!(registry.ids(), vec!["pdf-merge"]);
    }

    #[test]
    fn test_load_without_manifest_uses_builtins() {
        let registry = ToolRegistry::load(None).unwrap();
        assert_eq!(registry.len(), builtin_tools().len());
    }
}
