//! Tools Portal Entry Point
//!
//! Initializes logging, loads configuration, and runs the requested
//! subcommand.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use cli::{Cli, Commands};
use tools_portal::core::{Config, PortalServer};
use tools_portal::domains::compress::{
    CompressionRequest, CompressionService, DocumentMetadata, default_output_path,
};
use tools_portal::domains::pages::{check_site_links, export_site};
use tools_portal::domains::tools::ToolStatus;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let mut config = Config::from_env();
    if let Some(registry) = cli.registry.clone() {
        config.site.registry_path = Some(registry);
    }

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    init_logging(&level, config.logging.with_timestamps);

    match cli.command {
        #[cfg(feature = "http")]
        Commands::Serve { host, port, cors } => {
            if let Some(host) = host {
                config.http.host = host;
            }
            if let Some(port) = port {
                config.http.port = port;
            }
            config.http.enable_cors |= cors;
            serve(config).await
        }
        Commands::Render { out } => render(config, out),
        Commands::List { json } => list(config, json),
        Commands::Check { site } => check(config, site),
        Commands::Compress {
            input,
            output,
            level,
            title,
            author,
            subject,
            created,
            modified,
        } => {
            let request = CompressionRequest {
                output: output.unwrap_or_else(|| default_output_path(&input)),
                input,
                level,
                metadata: DocumentMetadata::from_raw(title, author, subject, created, modified),
            };
            compress(config, request)
        }
    }
}

#[cfg(feature = "http")]
async fn serve(config: Config) -> Result<()> {
    use tools_portal::core::TransportService;

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = TransportService::new(config.http.clone());
    let server = PortalServer::new(config).context("failed to load tool registry")?;

    info!("Server initialized with {} tools", server.registry().len());

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

fn render(config: Config, out: Option<std::path::PathBuf>) -> Result<()> {
    let out_dir = out.unwrap_or_else(|| config.site.output_dir.clone());
    let server = PortalServer::new(config).context("failed to load tool registry")?;

    let report = export_site(
        server.pages(),
        server.registry(),
        &server.config().site,
        server.config().compression.default_level,
        &out_dir,
    )?;

    for file in report.copied.iter().chain(&report.files) {
        println!("{}", file.display());
    }
    Ok(())
}

fn list(config: Config, json: bool) -> Result<()> {
    let server = PortalServer::new(config).context("failed to load tool registry")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&server.list_tools())?);
        return Ok(());
    }

    for tool in server.registry().list() {
        let target = match tool.status {
            ToolStatus::Available => tool.href.as_deref().unwrap_or_default(),
            ToolStatus::Planned => "-",
        };
        println!(
            "{:<20} {:<10} {:<28} {}",
            tool.id,
            tool.status.label(),
            tool.name,
            target
        );
    }
    Ok(())
}

fn check(mut config: Config, site: Option<std::path::PathBuf>) -> Result<()> {
    if let Some(site) = site {
        config.site.root = site;
    }
    let server = PortalServer::new(config).context("invalid tool registry")?;

    let problems = check_site_links(server.registry(), &server.config().site);
    for problem in &problems {
        eprintln!("{}: {} ({})", problem.id, problem.href, problem.reason);
    }

    if !problems.is_empty() {
        bail!("{} tool link(s) are broken", problems.len());
    }

    println!(
        "{} tools OK ({} available)",
        server.registry().len(),
        server.registry().available().count()
    );
    Ok(())
}

fn compress(config: Config, request: CompressionRequest) -> Result<()> {
    let service = CompressionService::new(config.compression);
    let report = service
        .compress(&request)
        .with_context(|| format!("failed to compress {}", request.input.display()))?;

    println!("{}", report.output.display());
    println!("{}", report.summary());
    if !request.metadata.is_empty() && !report.metadata_applied {
        eprintln!("warning: metadata could not be written");
    }
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
