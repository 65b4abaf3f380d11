//! Graph serialization to DOT.
//!
//! [`serialize`] turns a [`Graph`] into a DOT script for an external layout
//! engine. Output is a pure function of the graph: no state survives between
//! calls and the same graph always yields byte-identical text.
//!
//! # Module Structure
//!
//! - [`dot`]: escaping rules and the [`DotBuilder`] line writer
//! - [`layout`]: prefixed-attribute extraction and per-vertex/edge layouts
//! - [`cluster`]: display identifiers and `group` partitioning

pub mod cluster;
pub mod dot;
pub mod layout;

use graphdot_core::{Attrs, Graph};
use tracing::debug;

pub use cluster::{VertexGroup, VidTable, partition_groups};
pub use dot::{DotBuilder, escape, escape_attributes};
pub use layout::{edge_layout, extract_prefixed, vertex_layout};

use layout::{EDGE_DEFAULTS_PREFIX, GRAPH_DEFAULTS_PREFIX, NODE_DEFAULTS_PREFIX};

/// Global attribute blocks in emission order: keyword and graph-attribute prefix.
const DEFAULT_BLOCKS: [(&str, &str); 3] = [
    ("graph", GRAPH_DEFAULTS_PREFIX),
    ("node", NODE_DEFAULTS_PREFIX),
    ("edge", EDGE_DEFAULTS_PREFIX),
];

/// Serialize a graph to DOT.
///
/// - The script is a `digraph` as soon as one edge is directed.
/// - With more than one distinct `group`, every vertex is emitted inside a
///   `subgraph cluster_<N>`. Otherwise only vertices with a layout or without
///   edges are emitted, the rest are introduced by their edges.
/// - In a `digraph`, an edge whose endpoints are also connected the other way
///   round gets `dir=none`, so reciprocal pairs and undirected edges render
///   without arrowheads.
pub fn serialize(graph: &Graph) -> String {
    let directed = graph.has_directed_edges();
    let mut builder = DotBuilder::new(directed, graph.name());

    for (keyword, prefix) in DEFAULT_BLOCKS {
        builder.attr_block(keyword, &extract_prefixed(graph.attrs(), prefix));
    }

    let vids = VidTable::assign(graph);
    let groups = partition_groups(graph);
    let clustered = groups.len() > 1;

    if clustered {
        for (index, group) in groups.iter().enumerate() {
            builder.start_cluster(index, &group.label);
            for &id in &group.members {
                let vid = vids.get(id);
                if let Some(vertex) = graph.vertex(id) {
                    builder.vertex(vid, &vertex_layout(vertex, vid));
                }
            }
            builder.end_cluster();
        }
    } else {
        for vertex in graph.vertices() {
            let vid = vids.get(vertex.id());
            let layout = vertex_layout(vertex, vid);
            if !layout.is_empty() || vertex.is_isolated() {
                builder.vertex(vid, &layout);
            }
        }
    }

    let mut collapsed = 0usize;
    for edge in graph.edges() {
        let mut layout: Attrs = edge_layout(edge);
        if directed && !edge.is_self_loop() && graph.connects(edge.target(), edge.source()) {
            layout.set("dir", "none");
            collapsed += 1;
        }
        builder.edge(vids.get(edge.source()), vids.get(edge.target()), &layout);
    }

    let clusters = if clustered { groups.len() } else { 0 };
    debug!(
        directed,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        clusters,
        collapsed,
        "graph serialized"
    );

    builder.build()
}
