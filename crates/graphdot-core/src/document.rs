//! JSON graph documents.
//!
//! A document is the on-disk form of a [`Graph`]: vertices are attribute
//! objects, edges refer to vertices by their position in the `vertices`
//! array.
//!
//! ```json
//! {
//!   "attrs": { "name": "flows", "graphviz.graph.rankdir": "LR" },
//!   "vertices": [ { "id": "s" }, { "balance": 5 } ],
//!   "edges": [ { "source": 0, "target": 1, "directed": true, "attrs": { "flow": 3 } } ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use graphdot_error::{Error, ErrorKind, Result};

use crate::attrs::Attrs;
use crate::graph::{Graph, VertexId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
    #[serde(default)]
    pub vertices: Vec<Attrs>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub source: usize,
    pub target: usize,
    /// Edges are undirected unless marked.
    #[serde(default)]
    pub directed: bool,
    #[serde(default, skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,
}

impl GraphDocument {
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| {
            Error::deserialization_failed(e.to_string())
                .with_operation("document::from_json_str")
                .with_context("line", e.line().to_string())
                .set_source(e)
        })
    }

    /// Read and decode a document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            let err = if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::new(ErrorKind::IoFailed, e.to_string())
                    .with_context("path", path.display().to_string())
            };
            err.with_operation("document::load").set_source(e)
        })?;
        Self::from_json_str(&content)
            .map_err(|e| e.with_context("path", path.display().to_string()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::new(ErrorKind::SerializationFailed, e.to_string())
                .with_operation("document::to_json_string")
                .set_source(e)
        })
    }

    /// Build the graph, rejecting edges whose endpoints are out of range.
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::new();
        *graph.attrs_mut() = self.attrs;

        let ids: Vec<VertexId> = self
            .vertices
            .into_iter()
            .map(|attrs| graph.add_vertex_with(attrs))
            .collect();

        for (index, edge) in self.edges.into_iter().enumerate() {
            let source = endpoint(&ids, edge.source)?;
            let target = endpoint(&ids, edge.target)?;
            graph
                .add_edge_with(source, target, edge.directed, edge.attrs)
                .map_err(|e| {
                    e.with_operation("document::into_graph")
                        .with_context("edge", index.to_string())
                })?;
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph document loaded"
        );
        Ok(graph)
    }
}

fn endpoint(ids: &[VertexId], index: usize) -> Result<VertexId> {
    ids.get(index).copied().ok_or_else(|| {
        Error::invalid_vertex_ref(index.to_string(), ids.len())
            .with_operation("document::into_graph")
    })
}

impl Graph {
    /// The document form of this graph.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            attrs: self.attrs().clone(),
            vertices: self.vertices().iter().map(|v| v.attrs().clone()).collect(),
            edges: self
                .edges()
                .iter()
                .map(|e| EdgeDocument {
                    source: e.source().index(),
                    target: e.target().index(),
                    directed: e.is_directed(),
                    attrs: e.attrs().clone(),
                })
                .collect(),
        }
    }
}

impl TryFrom<GraphDocument> for Graph {
    type Error = Error;

    fn try_from(doc: GraphDocument) -> Result<Self> {
        doc.into_graph()
    }
}
