//! Output module for turning a resource graph into a manifest
//!
//! This module handles:
//! - Converting a `ResourceGraph` into a plain, acyclic `OutputObject` tree
//! - Rendering that tree as JSON or as a markdown outline
//! - Writing the rendered manifest to disk

mod json;
mod markdown;

pub use json::{to_json, write_json};
pub use markdown::{format_markdown_tree, write_markdown};

use crate::graph::{Resource, ResourceGraph, ResourceId};
use crate::GraphError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// One node of the serialized manifest
///
/// The shape is `{ url, filename, assets }` where `assets` holds the same structure for
/// every child in discovery order. An absent filename serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputObject {
    pub url: String,
    pub filename: Option<String>,
    pub assets: Vec<OutputObject>,
}

impl OutputObject {
    /// Returns the number of nodes in this tree, including itself
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.assets.iter());
        }
        count
    }

    /// Returns the number of levels in this tree (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.assets.iter().map(|asset| (asset, level + 1)));
        }
        deepest
    }
}

// Chains of assets can be far deeper than the call stack allows, so nested nodes are
// detached into a flat list before they are dropped.
impl Drop for OutputObject {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.assets);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.assets);
        }
    }
}

/// How a resource reached a second time during serialization is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CyclePolicy {
    /// Only resources on the current path are cut short. Shared resources reached
    /// through different parents are expanded every time, so a densely linked site can
    /// produce output exponential in the number of resources.
    OnPath,

    /// Every resource is expanded once; later occurrences carry no assets. The output
    /// holds at most one node per resource plus one per link.
    #[default]
    VisitOnce,
}

/// Output format of a written manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

/// Serializes a graph from its root into a plain nested manifest
///
/// Traversal is depth-first in children order with `CyclePolicy::VisitOnce`. A resource
/// reached again, either through a cycle or through a second parent, is emitted with its
/// url and filename and an empty `assets` list. The result is finite for every graph and
/// its size is bounded by the number of resources plus the number of links.
///
/// # Examples
///
/// ```
/// use site_mirror::graph::ResourceGraph;
/// use site_mirror::output::create_output_object;
///
/// let mut graph = ResourceGraph::new("http://google.com", Some("google.html"));
/// graph.create_child(graph.root(), "http://child-one.com", Some("child.html")).unwrap();
///
/// let output = create_output_object(&graph);
/// assert_eq!(output.url, "http://google.com");
/// assert_eq!(output.assets[0].filename.as_deref(), Some("child.html"));
/// ```
pub fn create_output_object(graph: &ResourceGraph) -> OutputObject {
    Walker::new(graph, CyclePolicy::default()).walk(graph.root(), graph.root_resource())
}

/// Serializes a graph starting at any of its resources, with an explicit cycle policy
///
/// # Returns
///
/// * `Ok(OutputObject)` - The manifest rooted at `start`
/// * `Err(GraphError::UnknownResource)` - `start` is not part of the graph
pub fn create_output_object_from(
    graph: &ResourceGraph,
    start: ResourceId,
    policy: CyclePolicy,
) -> Result<OutputObject, GraphError> {
    let resource = graph.get(start).ok_or(GraphError::UnknownResource(start))?;
    Ok(Walker::new(graph, policy).walk(start, resource))
}

/// Renders a manifest in the given format
pub fn render(output: &OutputObject, format: OutputFormat, pretty: bool) -> OutputResult<String> {
    match format {
        OutputFormat::Json => to_json(output, pretty),
        OutputFormat::Markdown => Ok(format_markdown_tree(output)),
    }
}

/// Renders a manifest and writes it to `path`
pub fn write_output(
    output: &OutputObject,
    format: OutputFormat,
    pretty: bool,
    path: &Path,
) -> OutputResult<()> {
    match format {
        OutputFormat::Json => write_json(output, pretty, path),
        OutputFormat::Markdown => write_markdown(output, path),
    }
}

/// Depth-first walker holding the identities it must not expand again
struct Walker<'a> {
    graph: &'a ResourceGraph,
    policy: CyclePolicy,
    seen: HashSet<ResourceId>,
}

/// A resource whose children are still being walked
struct Frame<'a> {
    id: ResourceId,
    resource: &'a Resource,
    expanded: bool,
    pending: std::slice::Iter<'a, ResourceId>,
    assets: Vec<OutputObject>,
}

impl<'a> Walker<'a> {
    fn new(graph: &'a ResourceGraph, policy: CyclePolicy) -> Self {
        Self {
            graph,
            policy,
            seen: HashSet::new(),
        }
    }

    /// Walks from `start` with an explicit stack of open frames
    fn walk(&mut self, start: ResourceId, resource: &'a Resource) -> OutputObject {
        let mut current = self.open(start, resource);
        let mut parents: Vec<Frame<'a>> = Vec::new();

        loop {
            if let Some(&child) = current.pending.next() {
                if let Some(child_resource) = self.graph.get(child) {
                    let opened = self.open(child, child_resource);
                    parents.push(std::mem::replace(&mut current, opened));
                }
                continue;
            }

            let node = self.close(current);
            match parents.pop() {
                Some(mut parent) => {
                    parent.assets.push(node);
                    current = parent;
                }
                None => return node,
            }
        }
    }

    fn open(&mut self, id: ResourceId, resource: &'a Resource) -> Frame<'a> {
        let expanded = self.seen.insert(id);
        if !expanded {
            tracing::trace!("Not expanding {} ({}) again", id, resource.url());
        }

        let children: &'a [ResourceId] = if expanded { resource.children() } else { &[] };
        Frame {
            id,
            resource,
            expanded,
            pending: children.iter(),
            assets: Vec::new(),
        }
    }

    fn close(&mut self, frame: Frame<'a>) -> OutputObject {
        if frame.expanded && self.policy == CyclePolicy::OnPath {
            self.seen.remove(&frame.id);
        }

        OutputObject {
            url: frame.resource.url().to_string(),
            filename: frame.resource.filename().map(str::to_string),
            assets: frame.assets,
        }
    }
}
