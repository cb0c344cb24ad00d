use std::path::Path;

use graphkit::graph::{Graph, GraphKind, Weight};
use serde::Serialize;

use crate::{app::GlobalOptions, commands::common::load_graph, output::print_output};

#[derive(Debug, Serialize)]
pub struct NeighborOutput {
    pub vertex: String,
    pub weight: Weight,
}

#[derive(Debug, Serialize)]
pub struct AdjacencyOutput {
    pub vertex: String,
    pub out_degree: usize,
    pub in_degree: usize,
    pub neighbors: Vec<NeighborOutput>,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub kind: GraphKind,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub adjacency: Vec<AdjacencyOutput>,
    #[serde(skip)]
    pub rendered: String,
}

/// Collect the adjacency list and per-vertex arc degrees.
pub fn build(graph: &Graph<String>) -> ShowOutput {
    let inner = graph.inner();
    let adjacency = inner
        .nodes()
        .map(|(node, vertex)| AdjacencyOutput {
            vertex: vertex.clone(),
            out_degree: inner.out_degree(node),
            in_degree: inner.in_degree(node),
            neighbors: graph
                .neighbors(vertex)
                .map(|(neighbor, weight)| NeighborOutput {
                    vertex: neighbor.clone(),
                    weight,
                })
                .collect(),
        })
        .collect();

    ShowOutput {
        kind: graph.kind(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        adjacency,
        rendered: graph.to_string(),
    }
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let output = build(&graph);

    print_output(&output, opts, |output| {
        println!(
            "{} graph: {} vertices, {} edges",
            output.kind, output.vertex_count, output.edge_count
        );
        print!("{}", output.rendered);
    })
}

pub fn run_dot(path: &Path, title: Option<&str>) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    print!("{}", graph.to_dot(title));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_directed_degrees() {
        let mut graph: Graph<String> = Graph::directed();
        graph.add_edge("A".into(), "B".into(), 2).unwrap();
        graph.add_edge("A".into(), "C".into(), 5).unwrap();
        graph.add_edge("C".into(), "B".into(), 1).unwrap();

        let output = build(&graph);
        assert_eq!(output.vertex_count, 3);
        assert_eq!(output.edge_count, 3);

        let degrees: Vec<_> = output
            .adjacency
            .iter()
            .map(|entry| (entry.vertex.as_str(), entry.out_degree, entry.in_degree))
            .collect();
        assert_eq!(degrees, vec![("A", 2, 0), ("B", 0, 2), ("C", 1, 1)]);
        assert_eq!(output.adjacency[0].neighbors.len(), 2);
    }

    #[test]
    fn test_build_undirected_counts_both_arcs() {
        let mut graph: Graph<String> = Graph::undirected();
        graph.add_edge("A".into(), "B".into(), 1).unwrap();

        let output = build(&graph);
        assert_eq!(output.edge_count, 1);
        assert!(output
            .adjacency
            .iter()
            .all(|entry| entry.out_degree == 1 && entry.in_degree == 1));
        assert_eq!(output.rendered, "A -> [(B, 1)]\nB -> [(A, 1)]\n");
    }
}
