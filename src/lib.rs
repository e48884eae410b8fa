//! Site-Mirror: the resource graph and URL algebra of an offline site mirror
//!
//! This crate turns references found while crawling a site into canonical absolute URLs
//! and relative on-disk paths, records discovered resources in a cycle-tolerant graph,
//! and serializes that graph into a plain nested manifest.

pub mod config;
pub mod graph;
pub mod manifest;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Mirror operations
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Resource graph errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Resource {0} does not belong to this graph")]
    UnknownResource(graph::ResourceId),

    #[error("Resource {child} is not a direct child of {parent}")]
    ChildNotFound {
        parent: graph::ResourceId,
        child: graph::ResourceId,
    },
}

/// Result type alias for Site-Mirror operations
pub type Result<T> = std::result::Result<T, MirrorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// Result type alias for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;

// Re-export commonly used types
pub use config::MirrorConfig;
pub use graph::{LinkRecorder, Resource, ResourceGraph, ResourceId};
pub use output::{create_output_object, CyclePolicy, OutputObject};
pub use crate::url::{
    get_filename_from_url, get_hash_from_url, get_relative_path, get_unix_path, get_url, is_url,
};
