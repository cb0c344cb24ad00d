//! Loading graph description files from disk.

use std::{fs, path::PathBuf};

use graphkit::{
    description::GraphDescription,
    graph::{Distance, GraphKind},
    Error,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const WEIGHTED_JSON: &str = r#"{
  "edges": [
    { "from": "A", "to": "B", "weight": 1 },
    { "from": "A", "to": "C", "weight": 4 },
    { "from": "B", "to": "C", "weight": 2 },
    { "from": "B", "to": "D", "weight": 7 },
    { "from": "C", "to": "D", "weight": 3 }
  ]
}"#;

const PIPELINE_TOML: &str = r#"
directed = true
vertices = ["fetch", "parse", "check", "emit"]

[[edges]]
from = "fetch"
to = "parse"

[[edges]]
from = "parse"
to = "check"

[[edges]]
from = "parse"
to = "emit"

[[edges]]
from = "check"
to = "emit"
"#;

#[test]
fn load_json_and_run_dijkstra() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "weighted.json", WEIGHTED_JSON);

    let graph = GraphDescription::from_path(&path).unwrap().build().unwrap();
    assert_eq!(graph.kind(), GraphKind::Undirected);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 5);

    let distances = graph.dijkstra(&"A".to_string()).unwrap();
    assert_eq!(distances[&"D".to_string()], Distance::Finite(8));
}

#[test]
fn load_toml_and_sort() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "pipeline.toml", PIPELINE_TOML);

    let graph = GraphDescription::from_path(&path).unwrap().build().unwrap();
    assert!(graph.is_directed());
    assert_eq!(
        graph.topological_sort_kahn().unwrap(),
        vec!["fetch", "parse", "check", "emit"]
    );
    assert_eq!(
        graph.topological_sort_dfs().unwrap(),
        vec!["fetch", "parse", "check", "emit"]
    );
}

#[test]
fn extension_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "PIPELINE.TOML", PIPELINE_TOML);
    assert!(GraphDescription::from_path(&path).is_ok());
}

#[test]
fn content_must_match_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "weighted.toml", WEIGHTED_JSON);
    assert!(matches!(
        GraphDescription::from_path(&path),
        Err(Error::Toml(_))
    ));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "weighted.yaml", WEIGHTED_JSON);
    assert!(matches!(
        GraphDescription::from_path(&path),
        Err(Error::UnsupportedFormat(_))
    ));
}

#[test]
fn saved_description_loads_back() {
    let dir = TempDir::new().unwrap();
    let original = GraphDescription::from_toml_str(PIPELINE_TOML)
        .unwrap()
        .build()
        .unwrap();

    let json = GraphDescription::from(&original).to_json_string().unwrap();
    let path = write(&dir, "saved.json", &json);
    let loaded = GraphDescription::from_path(&path).unwrap().build().unwrap();

    assert_eq!(loaded.kind(), original.kind());
    assert_eq!(loaded.to_string(), original.to_string());
}

#[test]
fn negative_weights_survive_loading() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "negative.json",
        r#"{ "directed": true, "edges": [
            { "from": "s", "to": "a", "weight": 4 },
            { "from": "s", "to": "b", "weight": 5 },
            { "from": "b", "to": "a", "weight": -3 }
        ] }"#,
    );
    let graph = GraphDescription::from_path(&path).unwrap().build().unwrap();

    let s = "s".to_string();
    assert!(matches!(
        graph.dijkstra(&s),
        Err(Error::NegativeWeight { weight: -3, .. })
    ));
    assert_eq!(
        graph.shortest_path(&s, &"a".to_string()).unwrap(),
        Some((vec!["s".to_string(), "b".to_string(), "a".to_string()], 2))
    );
}
