//! Vertex identifiers and group clustering.

use std::collections::HashMap;

use graphdot_core::{Graph, VertexId};

use crate::layout::{GROUP_ATTR, ID_ATTR};

/// Group assigned to vertices without a `group` attribute.
pub const DEFAULT_GROUP: &str = "0";

/// Display identifiers for every vertex, indexed by [`VertexId`].
///
/// An explicit `id` attribute wins; other vertices are numbered 1, 2, ...
/// in vertex order. Explicit ids do not advance the counter.
pub struct VidTable {
    vids: Vec<String>,
}

impl VidTable {
    pub fn assign(graph: &Graph) -> Self {
        let mut next = 1u64;
        let vids = graph
            .vertices()
            .iter()
            .map(|vertex| match vertex.attr(ID_ATTR) {
                Some(id) => id.to_string(),
                None => {
                    let vid = next.to_string();
                    next += 1;
                    vid
                }
            })
            .collect();
        Self { vids }
    }

    pub fn get(&self, id: VertexId) -> &str {
        &self.vids[id.index()]
    }

    pub fn len(&self) -> usize {
        self.vids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vids.is_empty()
    }
}

/// Vertices sharing one `group` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexGroup {
    pub label: String,
    pub members: Vec<VertexId>,
}

/// Partition vertices by `group`, in order of first appearance.
pub fn partition_groups(graph: &Graph) -> Vec<VertexGroup> {
    let mut groups: Vec<VertexGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for vertex in graph.vertices() {
        let label = vertex.attr(GROUP_ATTR).unwrap_or(DEFAULT_GROUP);
        let slot = *index.entry(label).or_insert_with(|| {
            groups.push(VertexGroup {
                label: label.to_string(),
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(vertex.id());
    }
    groups
}

#[cfg(test)]
mod tests {
    use graphdot_core::Attrs;

    use super::*;

    #[test]
    fn test_explicit_ids_do_not_consume_counter() {
        let mut g = Graph::new();
        let a = g.add_vertex();
        let b = g.add_vertex_with(Attrs::new().with("id", "7"));
        let c = g.add_vertex();
        let d = g.add_vertex_with(Attrs::new().with("id", "hub"));
        let e = g.add_vertex();

        let vids = VidTable::assign(&g);
        assert_eq!(vids.len(), 5);
        assert_eq!(vids.get(a), "1");
        assert_eq!(vids.get(b), "7");
        assert_eq!(vids.get(c), "2");
        assert_eq!(vids.get(d), "hub");
        assert_eq!(vids.get(e), "3");
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let mut g = Graph::new();
        let a = g.add_vertex_with(Attrs::new().with("group", "b"));
        let b = g.add_vertex();
        let c = g.add_vertex_with(Attrs::new().with("group", "b"));
        let d = g.add_vertex_with(Attrs::new().with("group", "a"));

        let groups = partition_groups(&g);
        assert_eq!(
            groups,
            vec![
                VertexGroup {
                    label: "b".into(),
                    members: vec![a, c]
                },
                VertexGroup {
                    label: "0".into(),
                    members: vec![b]
                },
                VertexGroup {
                    label: "a".into(),
                    members: vec![d]
                },
            ]
        );
    }

    #[test]
    fn test_explicit_zero_group_matches_default() {
        let mut g = Graph::new();
        g.add_vertex();
        g.add_vertex_with(Attrs::new().with("group", "0"));
        assert_eq!(partition_groups(&g).len(), 1);
    }

    #[test]
    fn test_empty_graph_has_no_groups() {
        assert!(partition_groups(&Graph::new()).is_empty());
    }

    #[test]
    fn test_many_interleaved_groups_keep_members_together() {
        let mut g = Graph::new();
        let ids: Vec<_> = (0..300)
            .map(|i| g.add_vertex_with(Attrs::new().with("group", (i % 100).to_string())))
            .collect();

        let groups = partition_groups(&g);
        assert_eq!(groups.len(), 100);
        for (n, group) in groups.iter().enumerate() {
            assert_eq!(group.label, n.to_string());
            assert_eq!(group.members, vec![ids[n], ids[n + 100], ids[n + 200]]);
        }
    }
}
