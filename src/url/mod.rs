//! URL handling module for Site-Mirror
//!
//! This module provides the URL algebra used while mirroring a site: classifying
//! references, resolving them against the referring page, extracting filenames and
//! fragments, and computing relative on-disk paths between mirrored files.
//!
//! Every function here is pure and can be called from any number of crawl workers.

mod filename;
mod path;
mod resolve;

// Re-export main functions
pub use filename::{get_filename_from_url, get_hash_from_url};
pub use path::{get_relative_path, get_unix_path};
pub use resolve::{get_origin, get_url};

/// Prefixes that mark a reference as absolute or protocol-relative
const URL_PREFIXES: &[&str] = &["http://", "https://", "//"];

/// Returns true if the reference is already an absolute or protocol-relative URL
///
/// Only the exact prefixes `http://`, `https://` and `//` qualify. Everything else,
/// including malformed schemes such as `http:/` or bare hosts, is treated as a
/// site-relative reference.
///
/// # Examples
///
/// ```
/// use site_mirror::url::is_url;
///
/// assert!(is_url("https://github.com"));
/// assert!(is_url("//www.youtube.com"));
/// assert!(!is_url("http:/www.youtube.com"));
/// assert!(!is_url("www.youtube.com"));
/// ```
pub fn is_url(candidate: &str) -> bool {
    URL_PREFIXES
        .iter()
        .any(|prefix| candidate.starts_with(*prefix))
}

/// Returns true if the reference inherits its scheme from the referring page
pub fn is_protocol_relative(candidate: &str) -> bool {
    candidate.starts_with("//")
}
