use std::path::Path;

use anyhow::{bail, Context};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, TopoMethod},
    commands::common::{join_keys, load_graph},
    output::print_output,
};

#[derive(Debug, Serialize)]
pub struct ToposortOutput {
    pub method: &'static str,
    pub order: Vec<String>,
}

pub fn run(path: &Path, method: TopoMethod, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    if !graph.is_directed() {
        bail!("topological sort needs a directed graph; set \"directed\": true in the description");
    }

    let (name, result) = match method {
        TopoMethod::Dfs => ("dfs", graph.topological_sort_dfs()),
        TopoMethod::Kahn => ("kahn", graph.topological_sort_kahn()),
    };

    let order = result.with_context(|| match graph.find_cycle() {
        Some(cycle) => format!("graph is not a DAG, cycle: {}", cycle.join(" -> ")),
        None => "graph is not a DAG".to_string(),
    })?;

    let output = ToposortOutput {
        method: name,
        order,
    };

    print_output(&output, opts, |output| {
        println!(
            "Topological order ({}): {}",
            output.method,
            join_keys(&output.order)
        );
    })
}
