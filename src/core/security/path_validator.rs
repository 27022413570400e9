use std::io;
use std::path::{Component, Path, PathBuf};

use crate::core::config::SiteConfig;

/// Errors that can occur during href and path validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Link must not be empty")]
    EmptyLink,

    #[error("Link '{href}' must be a relative path: {reason}")]
    NotRelative { href: String, reason: &'static str },

    #[error("Link '{href}' must not contain '..' segments")]
    ParentTraversal { href: String },

    #[error("Path '{path}' is outside the site root '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Symlink '{path}' is not allowed")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Validates that a tool href is a plain relative link inside the site.
///
/// Accepted links have no scheme, no leading slash, no backslashes, no query
/// or fragment and no `..` segment. The trimmed link is returned.
///
/// # Examples
///
/// ```rust
/// use tools_portal::core::security::validate_href;
///
/// assert!(validate_href("tools/auto-reply-generator.html").is_ok());
/// assert!(validate_href("../secret.html").is_err());
/// ```
pub fn validate_href(href: &str) -> Result<&str, PathSecurityError> {
    let href = href.trim();
    if href.is_empty() {
        return Err(PathSecurityError::EmptyLink);
    }

    let not_relative = |reason: &'static str| PathSecurityError::NotRelative {
        href: href.to_string(),
        reason,
    };

    if href.starts_with('/') {
        return Err(not_relative("leading '/'"));
    }
    if href.contains('\\') {
        return Err(not_relative("backslash"));
    }
    if href.contains('?') || href.contains('#') {
        return Err(not_relative("query or fragment"));
    }
    if href.contains(':') {
        return Err(not_relative("scheme or drive prefix"));
    }
    if href.split('/').any(|segment| segment == "..") {
        return Err(PathSecurityError::ParentTraversal {
            href: href.to_string(),
        });
    }

    Ok(href)
}

/// Resolves a relative request path to a file under the configured site root.
///
/// This function performs the following checks:
/// 1. Validates the relative path with the same rules as tool links
/// 2. Joins it to the canonical site root and checks that it exists
/// 3. Rejects symlinks unless the configuration allows them
/// 4. Ensures the canonical result is still within the site root
pub fn resolve_site_path(relative: &str, site: &SiteConfig) -> Result<PathBuf, PathSecurityError> {
    let relative = validate_href(relative)?;

    let canonical_root = site
        .root
        .canonicalize()
        .map_err(|e| PathSecurityError::IoError {
            path: site.root.clone(),
            error: e,
        })?;

    let path = canonical_root.join(relative);

    if !path.exists() {
        return Err(PathSecurityError::PathNotFound { path });
    }

    if !site.allow_symlinks && has_symlink(&canonical_root, Path::new(relative)) {
        return Err(PathSecurityError::SymlinkNotAllowed { path });
    }

    let canonical_path = path.canonicalize().map_err(|e| PathSecurityError::IoError {
        path: path.clone(),
        error: e,
    })?;

    if !canonical_path.starts_with(&canonical_root) {
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical_path,
            root: canonical_root,
        });
    }

    Ok(canonical_path)
}

/// Whether any component of `relative`, walked from `root`, is a symlink
fn has_symlink(root: &Path, relative: &Path) -> bool {
    let mut current = root.to_path_buf();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            current.push(part);
            if current.is_symlink() {
                return true;
            }
        }
    }
    false
}
