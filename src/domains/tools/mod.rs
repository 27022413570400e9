//! Tools domain module.
//!
//! This module holds the tool registry and the router resolving tool ids to
//! their pages.
//!
//! ## Architecture
//!
//! - `definitions/` - Built-in tool definitions (one file per tool)
//! - `descriptor.rs` - `ToolDescriptor` and its invariants
//! - `manifest.rs` - TOML manifest replacing the built-in definitions
//! - `registry.rs` - Ordered, validated registry
//! - `router.rs` - `open(id)` navigation
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolDefinition`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod descriptor;
mod error;
mod manifest;
mod registry;
mod router;

pub use descriptor::{ToolDescriptor, ToolStatus};
pub use error::ToolError;
pub use manifest::{load_manifest, parse_manifest};
pub use registry::{ToolRegistry, builtin_tools};
pub use router::{Navigation, ToolRouter};
