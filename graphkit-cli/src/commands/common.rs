use std::path::Path;

use anyhow::Context;
use graphkit::{description::GraphDescription, graph::Graph};

/// Load a graph description file and build the graph it describes.
pub fn load_graph(path: &Path) -> anyhow::Result<Graph<String>> {
    let description = GraphDescription::from_path(path)
        .with_context(|| format!("failed to load graph description: {}", path.display()))?;
    description
        .build()
        .with_context(|| format!("failed to build graph from {}", path.display()))
}

/// Render a list of vertex keys as `A, B, C`.
pub fn join_keys(keys: &[String]) -> String {
    keys.join(", ")
}

/// Render a path of vertex keys as `A -> B -> C`.
pub fn join_path(keys: &[String]) -> String {
    keys.join(" -> ")
}
