//! Static export of the portal and link checking.
//!
//! The exported directory can be published as-is on any static host: files
//! from the site root are copied over, the portal becomes `index.html` and
//! built-in tool pages are written at their hrefs.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use super::error::PageError;
use super::service::PageService;
use crate::core::config::SiteConfig;
use crate::core::security::resolve_site_path;
use crate::domains::compress::CompressionLevel;
use crate::domains::tools::ToolRegistry;
use crate::domains::tools::definitions::PdfCompressorTool;

/// Hrefs whose pages are generated by the portal itself.
pub const BUILTIN_PAGES: &[&str] = &[PdfCompressorTool::PAGE];

/// Whether `href` is served by a built-in page.
pub fn is_builtin_page(href: &str) -> bool {
    BUILTIN_PAGES.contains(&href)
}

/// Files written by [`export_site`].
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub output_dir: PathBuf,

    /// Pages rendered by the portal.
    pub files: Vec<PathBuf>,

    /// Files copied from the site root.
    pub copied: Vec<PathBuf>,
}

/// A registry link that does not resolve.
#[derive(Debug, Clone, Serialize)]
pub struct LinkProblem {
    pub id: String,
    pub href: String,
    pub reason: String,
}

/// Export the site into `out_dir`.
///
/// Files of the site root are copied first, subject to the same path and
/// symlink rules as when serving them. The portal and the built-in pages of
/// available tools are then rendered over them. Fails if a row of the
/// exported portal would link to a missing page.
#[instrument(skip(pages, registry, site))]
pub fn export_site(
    pages: &PageService,
    registry: &ToolRegistry,
    site: &SiteConfig,
    default_level: CompressionLevel,
    out_dir: &Path,
) -> Result<ExportReport, PageError> {
    fs::create_dir_all(out_dir)?;
    let copied = copy_site_files(site, out_dir)?;
    let mut files = Vec::new();

    let index = out_dir.join("index.html");
    fs::write(&index, pages.render_portal(registry, None)?)?;
    files.push(index);

    for tool in registry.available() {
        let Some(href) = tool.href.as_deref() else { continue };
        let Some(page) = pages.render_exported_builtin(href, default_level) else { continue };

        warn!(
            "{} is exported without its upload endpoint; it only works behind `tools-portal serve`",
            href
        );

        let target = out_dir.join(href);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, page?)?;
        files.push(target);
    }

    let missing: Vec<String> = registry
        .available()
        .filter_map(|tool| tool.href.as_deref())
        .filter(|href| !out_dir.join(href).is_file())
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(PageError::MissingPages(missing));
    }

    info!(
        "Exported {} pages and {} site files to {}",
        files.len(),
        copied.len(),
        out_dir.display()
    );
    Ok(ExportReport {
        output_dir: out_dir.to_path_buf(),
        files,
        copied,
    })
}

/// Copy the files of the site root into `out_dir`, skipping hidden entries
/// and `out_dir` itself when it lives inside the root.
fn copy_site_files(site: &SiteConfig, out_dir: &Path) -> Result<Vec<PathBuf>, PageError> {
    if !site.root.is_dir() {
        info!("Site root {} does not exist, nothing to copy", site.root.display());
        return Ok(Vec::new());
    }

    let root = site.root.canonicalize()?;
    let out = out_dir.canonicalize()?;
    let mut copied = Vec::new();

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || (!is_hidden(e) && !e.path().starts_with(&out)));

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(relative) = relative_href(&root, entry.path()) else {
            warn!("Skipping {}: not a valid site path", entry.path().display());
            continue;
        };

        let source = match resolve_site_path(&relative, site) {
            Ok(source) if source.is_file() => source,
            Ok(_) => continue,
            Err(e) => {
                warn!("Skipping {}: {}", relative, e);
                continue;
            }
        };

        let target = out_dir.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&source, &target)?;
        debug!("Copied {}", relative);
        copied.push(target);
    }

    Ok(copied)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// `path` relative to `root`, as a `/`-separated link.
fn relative_href(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

/// Check that every available tool links to a built-in page or to a file in
/// the site root.
pub fn check_site_links(registry: &ToolRegistry, site: &SiteConfig) -> Vec<LinkProblem> {
    let mut problems = Vec::new();

    for tool in registry.available() {
        let Some(href) = tool.href.as_deref() else { continue };
        if is_builtin_page(href) {
            continue;
        }

        match resolve_site_path(href, site) {
            Ok(path) if path.is_file() => {}
            Ok(path) => problems.push(LinkProblem {
                id: tool.id.clone(),
                href: href.to_string(),
                reason: format!("{} is not a file", path.display()),
            }),
            Err(e) => {
                warn!("Link of tool {} does not resolve: {}", tool.id, e);
                problems.push(LinkProblem {
                    id: tool.id.clone(),
                    href: href.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    problems
}
