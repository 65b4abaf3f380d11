use std::fs;

use graphdot_core::{Attrs, ErrorKind, Graph, GraphDocument};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn load_reads_document_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("ring.json");
    fs::write(
        &path,
        r#"{
            "attrs": {"name": "ring"},
            "vertices": [{}, {}, {}],
            "edges": [
                {"source": 0, "target": 1, "directed": true},
                {"source": 1, "target": 2, "directed": true},
                {"source": 2, "target": 0, "directed": true}
            ]
        }"#,
    )
    .expect("write fixture");

    let graph = GraphDocument::load(&path)
        .expect("load")
        .into_graph()
        .expect("build");
    assert_eq!(graph.name(), Some("ring"));
    assert_eq!(graph.edge_count(), 3);
    for vertex in graph.vertices() {
        assert_eq!(vertex.degree(), 2);
    }
}

#[test]
fn load_missing_file_is_file_not_found() {
    let dir = tempdir().expect("tempdir");
    let err = GraphDocument::load(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert_eq!(err.operation(), "document::load");
}

#[test]
fn saved_document_reloads_identically() {
    let mut graph = Graph::with_name("pipes");
    let a = graph.add_vertex_with(Attrs::new().with("id", "tank").with("balance", "4"));
    let b = graph.add_vertex();
    graph
        .add_edge_with(
            a,
            b,
            true,
            Attrs::new().with("capacity", "10").with("graphviz.color", "red"),
        )
        .expect("edge");

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("pipes.json");
    fs::write(&path, graph.to_document().to_json_string().expect("encode")).expect("write");

    let reloaded = GraphDocument::load(&path)
        .expect("load")
        .into_graph()
        .expect("build");
    assert_eq!(reloaded, graph);
}
