//! PDF compressor tool definition.
//!
//! Unlike the other tools, its page is generated by the portal itself
//! (see `domains::pages::definitions::PdfCompressorPage`) and its form posts
//! to the compression endpoint of the HTTP server.

use super::ToolDefinition;
use crate::domains::tools::ToolStatus;

/// Ghostscript-backed PDF compression with metadata editing.
pub struct PdfCompressorTool;

impl PdfCompressorTool {
    /// Path of the built-in page, relative to the site root.
    pub const PAGE: &'static str = "tools/pdf-compressor.html";

    /// Path of the compression endpoint, relative to the site root.
    pub const ACTION: &'static str = "tools/pdf-compressor/compress";

    /// Form action as seen from the page itself.
    pub const FORM_ACTION: &'static str = "pdf-compressor/compress";
}

impl ToolDefinition for PdfCompressorTool {
    const ID: &'static str = "pdf-compressor";
    const NAME: &'static str = "PDF Compressor";
    const DESCRIPTION: &'static str =
        "Shrink a PDF with Ghostscript and set its title, author, subject and dates";
    const STATUS: ToolStatus = ToolStatus::Available;
    const HREF: Option<&'static str> = Some(PdfCompressorTool::PAGE);
}
