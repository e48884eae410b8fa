//! Configuration module for Site-Mirror
//!
//! This module handles loading, parsing, and validating TOML files that describe a
//! starting page, the links discovered from it, and how the manifest is written.
//!
//! # Example
//!
//! ```no_run
//! use site_mirror::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mirror.toml")).unwrap();
//! println!("Replaying {} links", config.links.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{LinkEntry, MirrorConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
