//! Arena-backed graph model.
//!
//! Vertices and edges live in insertion-ordered vectors and are addressed by
//! dense `u32` handles. Handles are only issued by [`Graph`], so every edge
//! endpoint is guaranteed to be a vertex of the same graph.

use graphdot_error::{Error, Result};

use crate::attrs::Attrs;

/// Key of the graph attribute carrying the graph's display name.
pub const NAME_ATTR: &str = "name";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct VertexId(pub u32);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl VertexId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct EdgeId(pub u32);

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EdgeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: VertexId,
    attrs: Attrs,
    incident: Vec<EdgeId>,
}

impl Vertex {
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    /// Edges touching this vertex, in edge insertion order.
    ///
    /// A self-loop is listed once.
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident
    }

    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    pub fn is_isolated(&self) -> bool {
        self.incident.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
    directed: bool,
    attrs: Attrs,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Both endpoints as `(source, target)`.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    /// Whether travelling this edge leads from `from` to `to`.
    ///
    /// Undirected edges lead both ways.
    pub fn leads(&self, from: VertexId, to: VertexId) -> bool {
        (self.source == from && self.target == to)
            || (!self.directed && self.source == to && self.target == from)
    }
}

/// A graph with ordered vertices, ordered edges and its own attribute bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    attrs: Attrs,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let mut graph = Self::new();
        graph.attrs.set(NAME_ATTR, name);
        graph
    }

    pub fn name(&self) -> Option<&str> {
        self.attrs.get(NAME_ATTR)
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.add_vertex_with(Attrs::new())
    }

    pub fn add_vertex_with(&mut self, attrs: Attrs) -> VertexId {
        let id = VertexId::new(self.vertices.len() as u32);
        self.vertices.push(Vertex {
            id,
            attrs,
            incident: Vec::new(),
        });
        id
    }

    pub fn add_edge(&mut self, source: VertexId, target: VertexId, directed: bool) -> Result<EdgeId> {
        self.add_edge_with(source, target, directed, Attrs::new())
    }

    /// Add an edge between two vertices of this graph.
    ///
    /// Fails with `InvalidVertexRef` if either handle was not issued by this
    /// graph; the graph is left unchanged in that case.
    pub fn add_edge_with(
        &mut self,
        source: VertexId,
        target: VertexId,
        directed: bool,
        attrs: Attrs,
    ) -> Result<EdgeId> {
        for endpoint in [source, target] {
            if endpoint.index() >= self.vertices.len() {
                return Err(Error::invalid_vertex_ref(
                    endpoint.to_string(),
                    self.vertices.len(),
                )
                .with_operation("graph::add_edge"));
            }
        }

        let id = EdgeId::new(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            source,
            target,
            directed,
            attrs,
        });
        self.vertices[source.index()].incident.push(id);
        if target != source {
            self.vertices[target.index()].incident.push(id);
        }
        Ok(id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id.index())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id.index())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn incident_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertex(id)
            .map(|v| v.incident.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|e| &self.edges[e.index()])
    }

    /// Whether some edge leads from `source` to `target`.
    pub fn connects(&self, source: VertexId, target: VertexId) -> bool {
        self.incident_edges(source).any(|e| e.leads(source, target))
    }

    /// Whether any edge is directed. Stops at the first one found.
    pub fn has_directed_edges(&self) -> bool {
        self.edges.iter().any(Edge::is_directed)
    }
}
