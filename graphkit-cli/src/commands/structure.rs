use std::path::Path;

use graphkit::graph::GraphKind;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{join_keys, join_path, load_graph},
    output::print_output,
};

#[derive(Debug, Serialize)]
pub struct CyclesOutput {
    pub kind: GraphKind,
    pub has_cycle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ComponentsOutput {
    pub count: usize,
    pub components: Vec<Vec<String>>,
}

pub fn run_cycles(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;

    let output = CyclesOutput {
        kind: graph.kind(),
        has_cycle: graph.has_cycle(),
        cycle: graph.find_cycle(),
    };

    print_output(&output, opts, |output| {
        if output.has_cycle {
            println!("Cycle detected ({}).", output.kind);
            if let Some(cycle) = &output.cycle {
                println!("  {}", join_path(cycle));
            }
        } else {
            println!("No cycle found ({}).", output.kind);
        }
    })
}

pub fn run_components(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let components = graph.connected_components();

    let output = ComponentsOutput {
        count: components.len(),
        components,
    };

    print_output(&output, opts, |output| {
        println!("{} connected component(s):", output.count);
        for (i, component) in output.components.iter().enumerate() {
            println!("  {}: {}", i + 1, join_keys(component));
        }
    })
}
