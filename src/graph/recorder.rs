use crate::graph::{ResourceGraph, ResourceId};
use crate::url::{get_filename_from_url, get_hash_from_url, get_relative_path, get_url};
use crate::GraphError;
use std::collections::HashSet;
use url::Url;

/// Filename used when a URL has no last path segment
pub const DEFAULT_FILENAME: &str = "index.html";

/// Records links discovered during a crawl into a `ResourceGraph`
///
/// Each reference is resolved against the url of the page it was found on. A reference
/// to a url that is already modeled links the existing resource instead of creating a
/// duplicate, so pages linking back to an ancestor produce a cycle in the graph.
///
/// Fragments identify a position inside a document, not a separate document, so
/// resources are keyed by their url without the `#fragment`.
#[derive(Debug, Clone)]
pub struct LinkRecorder {
    graph: ResourceGraph,
    filenames: HashSet<String>,
}

impl LinkRecorder {
    /// Starts a recording rooted at the given page
    ///
    /// # Arguments
    ///
    /// * `root_url` - Absolute URL of the starting page
    /// * `root_filename` - On-disk name for the starting page; derived from the url when `None`
    ///
    /// # Returns
    ///
    /// * `Ok(LinkRecorder)` - Recorder holding a graph with only the root
    /// * `Err(MirrorError::Url)` - `root_url` is not an absolute URL with a host
    pub fn new(root_url: &str, root_filename: Option<&str>) -> crate::Result<Self> {
        let url = canonical_url(root_url, root_url)?;
        let filename = match root_filename {
            Some(name) => name.to_string(),
            None => derive_filename(&url),
        };

        let mut filenames = HashSet::new();
        filenames.insert(filename.clone());

        Ok(Self {
            graph: ResourceGraph::new(url, Some(filename.as_str())),
            filenames,
        })
    }

    /// Returns the graph recorded so far
    pub fn graph(&self) -> &ResourceGraph {
        &self.graph
    }

    /// Consumes the recorder, returning its graph
    pub fn into_graph(self) -> ResourceGraph {
        self.graph
    }

    /// Finds the resource recorded for an absolute url, ignoring its fragment
    pub fn find(&self, url: &str) -> Option<ResourceId> {
        let url = canonical_url(url, url).ok()?;
        self.graph.find_by_url(&url)
    }

    /// Records a reference found on the page `from`
    ///
    /// # Arguments
    ///
    /// * `from` - The resource the reference was found on
    /// * `href` - The raw reference as written in the page
    /// * `filename` - On-disk name for a newly created resource; derived from the url when `None`
    ///
    /// # Returns
    ///
    /// * `Ok(ResourceId)` - The new or already existing resource the reference points to
    /// * `Err(MirrorError)` - `from` is unknown or its url cannot serve as a base
    pub fn record(
        &mut self,
        from: ResourceId,
        href: &str,
        filename: Option<&str>,
    ) -> crate::Result<ResourceId> {
        let base = self.base_url(from)?;
        let url = canonical_url(&base, href)?;

        if let Some(existing) = self.graph.find_by_url(&url) {
            if !self.graph.children(from)?.contains(&existing) {
                self.graph.add_child(from, existing)?;
            }
            tracing::debug!("Linked {} to already modeled {}", from, url);
            return Ok(existing);
        }

        let name = match filename {
            Some(name) => name.to_string(),
            None => self.unique_filename(&derive_filename(&url)),
        };
        self.filenames.insert(name.clone());

        Ok(self.graph.create_child(from, url, Some(name.as_str()))?)
    }

    /// Rewrites a reference found on `from` into a path valid inside the offline copy
    ///
    /// The path is relative to the filename of `from` and keeps the `#fragment` of the
    /// original reference.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - The rewritten reference
    /// * `Ok(None)` - The target is not modeled or has no filename yet
    /// * `Err(MirrorError)` - `from` is unknown or its url cannot serve as a base
    pub fn rewrite_reference(&self, from: ResourceId, href: &str) -> crate::Result<Option<String>> {
        let base = self.base_url(from)?;
        let url = canonical_url(&base, href)?;

        let target = match self
            .graph
            .find_by_url(&url)
            .and_then(|id| self.graph.get(id))
            .and_then(|resource| resource.filename())
        {
            Some(target) => target,
            None => return Ok(None),
        };

        let source = self
            .graph
            .get(from)
            .and_then(|resource| resource.filename())
            .unwrap_or_default();

        let relative = get_relative_path(source, target);
        Ok(Some(format!("{}{}", relative, get_hash_from_url(href))))
    }

    fn base_url(&self, id: ResourceId) -> crate::Result<String> {
        self.graph
            .get(id)
            .map(|resource| resource.url().to_string())
            .ok_or_else(|| GraphError::UnknownResource(id).into())
    }

    /// Appends `_1`, `_2`, ... before the extension until the name is unused
    fn unique_filename(&self, candidate: &str) -> String {
        if !self.filenames.contains(candidate) {
            return candidate.to_string();
        }

        let (stem, extension) = match candidate.rfind('.') {
            Some(index) if index > 0 => candidate.split_at(index),
            _ => (candidate, ""),
        };

        (1..)
            .map(|n| format!("{}_{}{}", stem, n, extension))
            .find(|name| !self.filenames.contains(name))
            .unwrap_or_else(|| candidate.to_string())
    }
}

/// Resolves a reference, normalizes it and drops its fragment
///
/// Site-relative references come back from `get_url` as a plain concatenation, so the
/// result is parsed again to get percent-encoding and dot segments into one form.
fn canonical_url(base: &str, reference: &str) -> crate::Result<String> {
    let resolved = get_url(base, reference)?;

    match Url::parse(&resolved) {
        Ok(mut url) => {
            url.set_fragment(None);
            Ok(url.to_string())
        }
        Err(err) => {
            tracing::debug!("Keeping unparseable url {} as is: {}", resolved, err);
            let mut url = resolved;
            let hash_len = get_hash_from_url(&url).len();
            url.truncate(url.len() - hash_len);
            Ok(url)
        }
    }
}

fn derive_filename(url: &str) -> String {
    match get_filename_from_url(url) {
        "" => DEFAULT_FILENAME.to_string(),
        name => name.to_string(),
    }
}
