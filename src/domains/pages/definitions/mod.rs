//! Page definitions module.
//!
//! Each page (or page fragment) is defined in its own file with its name and
//! template source.
//!
//! ## Adding a New Page
//!
//! 1. Create a new file (e.g., `my_page.rs`)
//! 2. Implement the `PageDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod index;
mod notice;
mod pdf_compressor;
mod tool_row;

pub use index::IndexPage;
pub use notice::NoticeFragment;
pub use pdf_compressor::PdfCompressorPage;
pub use tool_row::ToolRowFragment;

/// Trait for page definitions.
pub trait PageDefinition {
    /// The unique name of the page.
    const NAME: &'static str;

    /// The template source, see [`super::templates`] for the syntax.
    fn template() -> &'static str;
}
