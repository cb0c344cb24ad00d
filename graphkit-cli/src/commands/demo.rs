use graphkit::{
    algorithms::SpanningTree,
    graph::{Distance, Graph},
};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct DemoOutput {
    pub adjacency: String,
    pub bfs: Vec<&'static str>,
    pub dfs: Vec<&'static str>,
    pub has_cycle: bool,
    pub components: Vec<Vec<&'static str>>,
    pub dijkstra: Vec<(&'static str, Distance)>,
    pub prim: SpanningTree<&'static str>,
}

/// The unweighted square A-B, A-C, B-D, C-D.
fn sample_graph() -> graphkit::Result<Graph<&'static str>> {
    let mut graph = Graph::undirected();
    graph.add_unit_edge("A", "B")?;
    graph.add_unit_edge("A", "C")?;
    graph.add_unit_edge("B", "D")?;
    graph.add_unit_edge("C", "D")?;
    Ok(graph)
}

/// The weighted graph used for shortest paths and spanning trees.
fn weighted_sample_graph() -> graphkit::Result<Graph<&'static str>> {
    let mut graph = Graph::undirected();
    graph.add_edge("A", "B", 1)?;
    graph.add_edge("A", "C", 4)?;
    graph.add_edge("B", "C", 2)?;
    graph.add_edge("B", "D", 7)?;
    graph.add_edge("C", "D", 3)?;
    Ok(graph)
}

fn build() -> graphkit::Result<DemoOutput> {
    let graph = sample_graph()?;
    let weighted = weighted_sample_graph()?;

    let distances = weighted.dijkstra(&"A")?;
    let dijkstra = weighted
        .vertices()
        .filter_map(|&vertex| distances.get(vertex).map(|&d| (vertex, d)))
        .collect();

    Ok(DemoOutput {
        adjacency: graph.to_string(),
        bfs: graph.bfs(&"A")?,
        dfs: graph.dfs(&"A")?,
        has_cycle: graph.has_cycle(),
        components: graph.connected_components(),
        dijkstra,
        prim: weighted.prim(&"A")?,
    })
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<()> {
    let output = build()?;

    print_output(&output, opts, |output| {
        println!("Graph:");
        print!("{}", output.adjacency);
        println!("\nBFS from A: {}", output.bfs.join(", "));
        println!("DFS from A: {}", output.dfs.join(", "));
        if output.has_cycle {
            println!("\nCycle detected (undirected).");
        } else {
            println!("\nNo cycle found (undirected).");
        }
        let components: Vec<String> = output
            .components
            .iter()
            .map(|component| format!("[{}]", component.join(", ")))
            .collect();
        println!("Connected components: {}", components.join(" "));

        println!("\nDijkstra from A:");
        let mut tw =
            TabWriter::new(vec![("Vertex", Align::Left), ("Distance", Align::Right)]).indent("  ");
        for (vertex, distance) in &output.dijkstra {
            tw.row(vec![(*vertex).to_string(), distance.to_string()]);
        }
        tw.print();

        println!("\nPrim's MST from A:");
        for (u, v, weight) in &output.prim.edges {
            println!("  {u} - {v} ({weight})");
        }
        println!("  Total weight: {}", output.prim.total_weight);
    })
}
