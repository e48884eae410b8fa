use crate::output::{CyclePolicy, OutputFormat};
use serde::Deserialize;

/// Main configuration structure for a manifest replay
#[derive(Debug, Clone, Deserialize)]
pub struct MirrorConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "link")]
    pub links: Vec<LinkEntry>,
}

/// The page the mirror starts from
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Absolute URL of the starting page
    pub url: String,

    /// On-disk name of the starting page
    #[serde(default = "default_root_filename")]
    pub filename: String,
}

/// Manifest output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Rendering of the manifest
    #[serde(default)]
    pub format: OutputFormat,

    /// Indent JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Handling of resources reached again during serialization
    #[serde(default, rename = "cycle-policy")]
    pub cycle_policy: CyclePolicy,

    /// Path of the manifest file; written to stdout when absent
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
            cycle_policy: CyclePolicy::default(),
            path: None,
        }
    }
}

/// One reference discovered during a crawl, in discovery order
#[derive(Debug, Clone, Deserialize)]
pub struct LinkEntry {
    /// URL of the already recorded page the reference was found on
    pub from: String,

    /// The raw reference as written in the page
    pub href: String,

    /// On-disk name for the target; derived from its url when absent
    #[serde(default)]
    pub filename: Option<String>,
}

fn default_root_filename() -> String {
    crate::graph::DEFAULT_FILENAME.to_string()
}

fn default_pretty() -> bool {
    true
}
