use std::fs;

use graphdot::{GraphdotOptions, RenderArgs, run_main};
use graphdot_error::ErrorKind;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture_document() -> &'static str {
    r#"{
        "attrs": {"name": "supply", "graphviz.graph.rankdir": "LR"},
        "vertices": [
            {"id": "plant", "balance": 4},
            {"group": "0"},
            {"id": "shop", "balance": -4}
        ],
        "edges": [
            {"source": 0, "target": 1, "directed": true, "attrs": {"flow": 4, "capacity": 6}},
            {"source": 1, "target": 2, "directed": true, "attrs": {"flow": 4}},
            {"source": 2, "target": 1, "directed": true}
        ]
    }"#
}

fn write_fixture() -> (tempfile::TempDir, String) {
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("supply.json");
    fs::write(&file_path, fixture_document()).expect("write fixture");
    (dir, file_path.display().to_string())
}

fn base_options(file: String) -> GraphdotOptions {
    GraphdotOptions {
        files: vec![file],
        ..Default::default()
    }
}

fn run_to_string(opts: &GraphdotOptions) -> String {
    let bytes = run_main(opts).expect("run").expect("output");
    String::from_utf8(bytes).expect("utf8")
}

#[test]
fn document_serializes_to_dot() {
    let (_dir, file) = write_fixture();

    let expected = "\
digraph \"supply\" {
  graph [rankdir=\"LR\"]
  \"plant\" [label=\"plant (+4)\"]
  \"shop\" [label=\"shop (-4)\"]
  \"plant\" -> 1 [label=\"4/6\"]
  1 -> \"shop\" [label=\"4/∞\" dir=\"none\"]
  \"shop\" -> 1 [dir=\"none\"]
}
";
    assert_eq!(run_to_string(&base_options(file)), expected);
}

#[test]
fn name_override_replaces_header() {
    let (_dir, file) = write_fixture();
    let mut opts = base_options(file);
    opts.name = Some("renamed".to_string());

    let out = run_to_string(&opts);
    assert!(out.starts_with("digraph \"renamed\" {\n"), "{out}");
}

#[test]
fn directory_inputs_are_joined_in_path_order() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("a.json"),
        r#"{"vertices": [{}, {}], "edges": [{"source": 0, "target": 1}]}"#,
    )
    .expect("write a");
    fs::write(dir.path().join("b.json"), r#"{"vertices": [{}]}"#).expect("write b");

    let opts = GraphdotOptions {
        dirs: vec![dir.path().display().to_string()],
        ..Default::default()
    };
    assert_eq!(run_to_string(&opts), "graph {\n  1 -- 2\n}\n\ngraph {\n  1\n}\n");
}

#[test]
fn dangling_edge_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{"vertices": [{}], "edges": [{"source": 0, "target": 3, "directed": true}]}"#,
    )
    .expect("write");

    let err = run_main(&base_options(path.display().to_string())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidVertexRef);
}

#[test]
fn missing_engine_surfaces_render_failure() {
    let (_dir, file) = write_fixture();
    let mut opts = base_options(file);
    opts.render = RenderArgs::new()
        .with_format("svg")
        .with_engine("/nonexistent/graphdot-engine");

    let err = run_main(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RenderProcessFailed);
    assert_eq!(
        err.context_value("program"),
        Some("/nonexistent/graphdot-engine")
    );
}
