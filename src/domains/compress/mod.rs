//! PDF compressor domain.
//!
//! Compresses PDF files with Ghostscript presets and writes document
//! metadata (title, author, subject, creation and modification dates).
//!
//! ## Architecture
//!
//! - `level.rs` - Compression levels and their `PDFSETTINGS` presets
//! - `metadata.rs` - Metadata, PDF date conversion, pdfmark encoding
//! - `ghostscript.rs` - Executable discovery and invocation
//! - `service.rs` - `CompressionService` running a full job
//! - `error.rs` - Compression-specific error types

mod error;
mod ghostscript;
mod level;
mod metadata;
mod service;

pub use error::CompressError;
pub use ghostscript::Ghostscript;
pub use level::CompressionLevel;
pub use metadata::{DocumentMetadata, format_pdf_date};
pub use service::{CompressionReport, CompressionRequest, CompressionService, default_output_path};
