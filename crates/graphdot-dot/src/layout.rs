//! Per-entity layout computation.
//!
//! A layout is the attribute list written after a vertex or edge statement.
//! It starts from the entity's `graphviz.`-prefixed attributes and then folds
//! in labels derived from domain attributes (balance, flow, capacity, weight).

use graphdot_core::{Attrs, Edge, Vertex};

/// Prefix of attributes copied verbatim into a vertex or edge layout.
pub const LAYOUT_PREFIX: &str = "graphviz.";
/// Graph attributes with this prefix become the `graph [...]` block.
pub const GRAPH_DEFAULTS_PREFIX: &str = "graphviz.graph.";
/// Graph attributes with this prefix become the `node [...]` block.
pub const NODE_DEFAULTS_PREFIX: &str = "graphviz.node.";
/// Graph attributes with this prefix become the `edge [...]` block.
pub const EDGE_DEFAULTS_PREFIX: &str = "graphviz.edge.";

pub const ID_ATTR: &str = "id";
pub const GROUP_ATTR: &str = "group";
pub const BALANCE_ATTR: &str = "balance";
pub const FLOW_ATTR: &str = "flow";
pub const CAPACITY_ATTR: &str = "capacity";
pub const WEIGHT_ATTR: &str = "weight";
pub const LABEL_KEY: &str = "label";

const INFINITY: &str = "∞";

/// Collect the attributes whose key starts with `prefix`, keyed by the rest.
///
/// The match is a plain string prefix, not a word boundary.
pub fn extract_prefixed(attrs: &Attrs, prefix: &str) -> Attrs {
    attrs
        .iter()
        .filter_map(|(key, value)| key.strip_prefix(prefix).map(|rest| (rest, value)))
        .collect()
}

/// Layout of a vertex statement.
///
/// A numeric `balance` is appended to the label as ` (+5)` or ` (-2)`; a
/// vertex without an explicit label is labelled with its `vid` first.
pub fn vertex_layout(vertex: &Vertex, vid: &str) -> Attrs {
    let mut layout = extract_prefixed(vertex.attrs(), LAYOUT_PREFIX);

    if let Some(balance) = vertex.attr(BALANCE_ATTR).and_then(signed_balance) {
        let label = layout.get(LABEL_KEY).unwrap_or(vid);
        let label = format!("{label} ({balance})");
        layout.set(LABEL_KEY, label);
    }

    layout
}

/// Balance as written in a label, or `None` when it is not a number.
fn signed_balance(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
    if value > 0.0 && !raw.starts_with('+') {
        Some(format!("+{raw}"))
    } else {
        Some(raw.to_string())
    }
}

/// Layout of an edge statement, including the derived flow label.
pub fn edge_layout(edge: &Edge) -> Attrs {
    let mut layout = extract_prefixed(edge.attrs(), LAYOUT_PREFIX);

    if let Some(derived) = derived_edge_label(edge) {
        let label = match layout.get(LABEL_KEY) {
            Some(existing) => format!("{existing} {derived}"),
            None => derived,
        };
        layout.set(LABEL_KEY, label);
    }

    layout
}

/// `flow/capacity[/weight]`, `0/capacity[/weight]` or `weight`.
pub fn derived_edge_label(edge: &Edge) -> Option<String> {
    let flow = edge.attr(FLOW_ATTR);
    let capacity = edge.attr(CAPACITY_ATTR);

    let flow_part = match (flow, capacity) {
        (Some(flow), capacity) => Some(format!("{flow}/{}", capacity.unwrap_or(INFINITY))),
        (None, Some(capacity)) => Some(format!("0/{capacity}")),
        (None, None) => None,
    };

    match (flow_part, edge.attr(WEIGHT_ATTR)) {
        (Some(part), Some(weight)) => Some(format!("{part}/{weight}")),
        (Some(part), None) => Some(part),
        (None, Some(weight)) => Some(weight.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use graphdot_core::Graph;

    use super::*;

    fn edge_with(attrs: Attrs) -> Graph {
        let mut g = Graph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge_with(a, b, true, attrs).unwrap();
        g
    }

    fn vertex_with(attrs: Attrs) -> Graph {
        let mut g = Graph::new();
        g.add_vertex_with(attrs);
        g
    }

    #[test]
    fn test_extract_prefixed_strips_and_keeps_order() {
        let attrs = Attrs::new()
            .with("graphviz.shape", "box")
            .with("balance", "3")
            .with("graphviz.color", "red")
            .with("graphvizfoo", "no");
        let extracted = extract_prefixed(&attrs, LAYOUT_PREFIX);
        let pairs: Vec<_> = extracted.iter().collect();
        assert_eq!(pairs, vec![("shape", "box"), ("color", "red")]);
    }

    #[test]
    fn test_extract_prefixed_is_not_word_bounded() {
        let attrs = Attrs::new().with("graphviz.nodesep", "1");
        let extracted = extract_prefixed(&attrs, "graphviz.node");
        assert_eq!(extracted.get("sep"), Some("1"));
    }

    #[test]
    fn test_positive_balance_seeds_label_with_vid() {
        let g = vertex_with(Attrs::new().with("balance", "5"));
        let layout = vertex_layout(&g.vertices()[0], "4");
        assert_eq!(layout.get("label"), Some("4 (+5)"));
    }

    #[test]
    fn test_negative_and_zero_balance_as_is() {
        let g = vertex_with(Attrs::new().with("balance", "-2"));
        assert_eq!(vertex_layout(&g.vertices()[0], "1").get("label"), Some("1 (-2)"));

        let g = vertex_with(Attrs::new().with("balance", "0"));
        assert_eq!(vertex_layout(&g.vertices()[0], "1").get("label"), Some("1 (0)"));
    }

    #[test]
    fn test_balance_appends_to_explicit_label() {
        let g = vertex_with(
            Attrs::new()
                .with("graphviz.label", "source")
                .with("balance", "1.5"),
        );
        let layout = vertex_layout(&g.vertices()[0], "1");
        assert_eq!(layout.get("label"), Some("source (+1.5)"));
    }

    #[test]
    fn test_non_numeric_balance_ignored() {
        let g = vertex_with(Attrs::new().with("balance", "lots"));
        assert!(vertex_layout(&g.vertices()[0], "1").is_empty());
    }

    #[test]
    fn test_flow_without_capacity_is_unbounded() {
        let g = edge_with(Attrs::new().with("flow", "3"));
        assert_eq!(derived_edge_label(&g.edges()[0]).as_deref(), Some("3/∞"));
    }

    #[test]
    fn test_capacity_without_flow_starts_at_zero() {
        let g = edge_with(Attrs::new().with("capacity", "10"));
        assert_eq!(derived_edge_label(&g.edges()[0]).as_deref(), Some("0/10"));
    }

    #[test]
    fn test_flow_capacity_weight() {
        let g = edge_with(
            Attrs::new()
                .with("weight", "2")
                .with("capacity", "10")
                .with("flow", "3"),
        );
        assert_eq!(derived_edge_label(&g.edges()[0]).as_deref(), Some("3/10/2"));
    }

    #[test]
    fn test_weight_alone() {
        let g = edge_with(Attrs::new().with("weight", "7"));
        assert_eq!(derived_edge_label(&g.edges()[0]).as_deref(), Some("7"));
    }

    #[test]
    fn test_derived_label_merges_with_explicit_label() {
        let g = edge_with(
            Attrs::new()
                .with("graphviz.label", "pipe")
                .with("graphviz.color", "blue")
                .with("flow", "1")
                .with("capacity", "4"),
        );
        let layout = edge_layout(&g.edges()[0]);
        let pairs: Vec<_> = layout.iter().collect();
        assert_eq!(pairs, vec![("label", "pipe 1/4"), ("color", "blue")]);
    }

    #[test]
    fn test_plain_edge_has_empty_layout() {
        let g = edge_with(Attrs::new().with("note", "ignored"));
        assert!(edge_layout(&g.edges()[0]).is_empty());
    }
}
