//! Resource graph module for tracking discovered resources
//!
//! This module models everything found while mirroring a site as a graph of resources.
//!
//! # Components
//!
//! - `ResourceGraph`: Arena owning every `Resource`, addressed by `ResourceId`
//! - `Resource`: One discovered document or asset with its url, filename and children
//! - `LinkRecorder`: Resolves references found on a page and records them in the graph
//!
//! Child slots hold ids rather than owned nodes, so a resource may be reachable from
//! several parents and cycles are allowed. Nothing in this module detects or rejects
//! them; see `output::create_output_object` for cycle-safe traversal.

mod recorder;
mod resource;

// Re-export main types
pub use recorder::{LinkRecorder, DEFAULT_FILENAME};
pub use resource::{Resource, ResourceGraph, ResourceId};
