// Security module for tool links and site file access
//
// Tool hrefs must stay relative links inside the site, and files served from
// the site root must not escape it through `..` segments or symlinks.

pub mod path_validator;

pub use path_validator::{PathSecurityError, resolve_site_path, validate_href};
