//! Graph model consumed by the DOT serializer.
//!
//! - [`attrs`]: insertion-ordered attribute bags
//! - [`graph`]: arena-backed vertices and edges
//! - [`document`]: JSON documents describing a graph

pub mod attrs;
pub mod document;
pub mod graph;

pub use attrs::Attrs;
pub use document::{EdgeDocument, GraphDocument};
pub use graph::{Edge, EdgeId, Graph, NAME_ATTR, Vertex, VertexId};

pub use graphdot_error::{Error, ErrorKind, Result};
