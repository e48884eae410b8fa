use crate::{GraphError, GraphResult};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_TAG: AtomicU64 = AtomicU64::new(0);

/// Identity of a resource inside a `ResourceGraph`
///
/// An id carries the tag of the graph that issued it. Every other graph rejects it
/// with `GraphError::UnknownResource`, even when its index is in range there. A cloned
/// graph keeps the tag of its source, so ids stay valid across the clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    graph: u64,
    index: usize,
}

impl ResourceId {
    /// Returns the arena index of this resource
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A discovered document or asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    url: String,
    filename: Option<String>,
    children: Vec<ResourceId>,
}

impl Resource {
    fn new(url: String, filename: Option<String>) -> Self {
        Self {
            url,
            filename,
            children: Vec::new(),
        }
    }

    /// Canonical absolute URL; fixed at creation
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Relative on-disk path chosen for this resource, if assigned yet
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Children in discovery order
    pub fn children(&self) -> &[ResourceId] {
        &self.children
    }
}

/// Arena of resources discovered during a crawl
///
/// The graph always has a root, created together with the graph. Resources are never
/// removed; the whole graph is dropped once the report has been produced.
///
/// The graph has no internal locking. Callers that share it between crawl workers
/// must serialize mutations themselves (for example behind a `Mutex`).
#[derive(Debug, Clone)]
pub struct ResourceGraph {
    tag: u64,
    resources: Vec<Resource>,
    root: ResourceId,
}

impl ResourceGraph {
    /// Creates a graph holding only a root resource
    ///
    /// # Examples
    ///
    /// ```
    /// use site_mirror::graph::ResourceGraph;
    ///
    /// let graph = ResourceGraph::new("http://example.com/", Some("index.html"));
    /// let root = graph.get(graph.root()).unwrap();
    /// assert_eq!(root.url(), "http://example.com/");
    /// assert!(root.children().is_empty());
    /// ```
    pub fn new(url: impl Into<String>, filename: Option<&str>) -> Self {
        let tag = NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed);
        let root = Resource::new(url.into(), filename.map(str::to_string));
        Self {
            tag,
            resources: vec![root],
            root: ResourceId {
                graph: tag,
                index: 0,
            },
        }
    }

    /// Returns the id of the root resource
    pub fn root(&self) -> ResourceId {
        self.root
    }

    /// Returns the root resource
    pub fn root_resource(&self) -> &Resource {
        &self.resources[self.root.index]
    }

    /// Returns the number of resources in the graph
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// A graph always holds at least its root
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Looks up a resource by id
    pub fn get(&self, id: ResourceId) -> Option<&Resource> {
        if id.graph != self.tag {
            return None;
        }
        self.resources.get(id.index)
    }

    /// Returns the children of a resource in discovery order
    pub fn children(&self, id: ResourceId) -> GraphResult<&[ResourceId]> {
        self.resource(id).map(Resource::children)
    }

    /// Iterates over every resource with its id, in creation order
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, &Resource)> {
        self.resources
            .iter()
            .enumerate()
            .map(move |(index, resource)| (self.id_at(index), resource))
    }

    /// Finds the first resource created with the given url
    pub fn find_by_url(&self, url: &str) -> Option<ResourceId> {
        self.iter()
            .find(|(_, resource)| resource.url == url)
            .map(|(id, _)| id)
    }

    /// Creates a new resource and appends it to the children of `parent`
    ///
    /// The url is stored as given; resolving it is the caller's job.
    ///
    /// # Returns
    ///
    /// * `Ok(ResourceId)` - Id of the new child
    /// * `Err(GraphError::UnknownResource)` - `parent` is not part of this graph
    pub fn create_child(
        &mut self,
        parent: ResourceId,
        url: impl Into<String>,
        filename: Option<&str>,
    ) -> GraphResult<ResourceId> {
        self.resource(parent)?;

        let child = self.id_at(self.resources.len());
        self.resources
            .push(Resource::new(url.into(), filename.map(str::to_string)));
        self.resources[parent.index].children.push(child);

        tracing::debug!(
            "Created resource {} ({}) under {}",
            child,
            self.resources[child.index].url,
            parent
        );
        Ok(child)
    }

    /// Replaces the child slot holding `old_child` with `new_child`, keeping its position
    ///
    /// `new_child` may be any resource of the graph, including an ancestor of `parent`,
    /// which introduces a cycle. Only the first slot holding `old_child` is replaced.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The slot was replaced
    /// * `Err(GraphError::ChildNotFound)` - `old_child` is not a direct child of `parent`
    /// * `Err(GraphError::UnknownResource)` - `parent` or `new_child` is not part of this graph
    pub fn update_child(
        &mut self,
        parent: ResourceId,
        old_child: ResourceId,
        new_child: ResourceId,
    ) -> GraphResult<()> {
        self.resource(new_child)?;

        let slot = self
            .resource(parent)?
            .children
            .iter()
            .position(|&child| child == old_child)
            .ok_or(GraphError::ChildNotFound {
                parent,
                child: old_child,
            })?;

        self.resources[parent.index].children[slot] = new_child;
        tracing::debug!(
            "Replaced child {} of {} with {}",
            old_child,
            parent,
            new_child
        );
        Ok(())
    }

    /// Appends an already existing resource to the children of `parent`
    ///
    /// This is how a crawl records a link to a page it has modeled before. Like
    /// `update_child`, it may introduce a cycle.
    pub fn add_child(&mut self, parent: ResourceId, child: ResourceId) -> GraphResult<()> {
        self.resource(child)?;
        self.resource(parent)?;
        self.resources[parent.index].children.push(child);
        Ok(())
    }

    /// Assigns (or reassigns) the on-disk filename of a resource
    pub fn set_filename(
        &mut self,
        id: ResourceId,
        filename: impl Into<String>,
    ) -> GraphResult<()> {
        self.resource(id)?;
        self.resources[id.index].filename = Some(filename.into());
        Ok(())
    }

    fn resource(&self, id: ResourceId) -> GraphResult<&Resource> {
        self.get(id).ok_or(GraphError::UnknownResource(id))
    }

    fn id_at(&self, index: usize) -> ResourceId {
        ResourceId {
            graph: self.tag,
            index,
        }
    }
}
