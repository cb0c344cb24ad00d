use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{join_keys, load_graph},
    output::print_output,
};

/// Visitation order to report.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Bfs,
    Dfs,
}

#[derive(Debug, Serialize)]
pub struct TraversalOutput {
    pub order: Order,
    pub start: String,
    pub visited: Vec<String>,
}

pub fn run(path: &Path, start: &str, order: Order, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let key = start.to_string();

    let visited = match order {
        Order::Bfs => graph.bfs(&key),
        Order::Dfs => graph.dfs(&key),
    }
    .with_context(|| format!("cannot traverse from '{start}'"))?;

    let output = TraversalOutput {
        order,
        start: key,
        visited,
    };

    print_output(&output, opts, |output| {
        let label = match output.order {
            Order::Bfs => "BFS",
            Order::Dfs => "DFS",
        };
        println!("{label} from {}: {}", output.start, join_keys(&output.visited));
    })
}
