//! Built-in tool definitions.
//!
//! Each tool is declared in its own file with its registry metadata.
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register it in `registry.rs`

mod auto_reply;
mod pdf_compressor;

pub use auto_reply::AutoReplyTool;
pub use pdf_compressor::PdfCompressorTool;

use super::descriptor::{ToolDescriptor, ToolStatus};

/// Trait for built-in tool definitions.
///
/// Each tool must implement this trait to provide its registry entry.
pub trait ToolDefinition {
    /// The unique, stable id of the tool.
    const ID: &'static str;

    /// The display name of the tool.
    const NAME: &'static str;

    /// A one-line description of the tool.
    const DESCRIPTION: &'static str;

    /// Availability of the tool.
    const STATUS: ToolStatus;

    /// Relative path to the tool's page, `None` while planned.
    const HREF: Option<&'static str>;

    /// Build the registry descriptor for this tool.
    fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            id: Self::ID.to_string(),
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            href: Self::HREF.map(str::to_string),
            status: Self::STATUS,
        }
    }
}
