//! CLI command definitions using clap.
//!
//! Subcommands:
//! - serve: run the portal over HTTP
//! - render: export the portal and built-in pages as static files
//! - list: print the registry
//! - check: validate the registry and the pages it links to
//! - compress: compress a PDF with Ghostscript

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tools_portal::domains::compress::CompressionLevel;

/// Tools portal - a registry of small tools behind one landing page
#[derive(Parser, Debug)]
#[command(name = "tools-portal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML manifest replacing the built-in tool list
    #[arg(short, long, global = true)]
    pub registry: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the portal over HTTP
    #[cfg(feature = "http")]
    Serve {
        /// Host address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Allow cross-origin requests
        #[arg(long)]
        cors: bool,
    },

    /// Write the portal and built-in tool pages to a directory
    Render {
        /// Output directory (defaults to the configured one)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List registered tools
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate the registry and the pages it links to
    Check {
        /// Site root holding the tool pages
        #[arg(long)]
        site: Option<PathBuf>,
    },

    /// Compress a PDF file
    Compress {
        /// PDF file to compress
        input: PathBuf,

        /// Output file (defaults to <stem>_compressed<ext> next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compression level, 0 (least) to 4 (most)
        #[arg(short, long, default_value = "2")]
        level: CompressionLevel,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Document author
        #[arg(long)]
        author: Option<String>,

        /// Document subject
        #[arg(long)]
        subject: Option<String>,

        /// Creation date (YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS])
        #[arg(long)]
        created: Option<String>,

        /// Modification date (YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS])
        #[arg(long)]
        modified: Option<String>,
    },
}
