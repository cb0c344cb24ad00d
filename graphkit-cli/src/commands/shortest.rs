use std::path::Path;

use anyhow::{anyhow, Context};
use graphkit::{
    algorithms::{self, ShortestPaths},
    graph::{Distance, DistanceMatrix, Weight},
};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, PathAlgorithm},
    commands::common::{join_path, load_graph},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct DistanceEntry {
    pub vertex: String,
    pub distance: Distance,
}

#[derive(Debug, Serialize)]
pub struct PathOutput {
    pub to: String,
    pub vertices: Vec<String>,
    pub length: Option<Weight>,
}

#[derive(Debug, Serialize)]
pub struct ShortestOutput {
    pub algorithm: &'static str,
    pub start: String,
    pub distances: Vec<DistanceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathOutput>,
}

#[derive(Debug, Serialize)]
pub struct AllPairsOutput {
    pub vertices: Vec<String>,
    pub distances: DistanceMatrix,
}

pub fn run(
    path: &Path,
    start: &str,
    algorithm: PathAlgorithm,
    to: Option<&str>,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let source = graph
        .node_id(&start.to_string())
        .ok_or_else(|| anyhow!("start vertex '{start}' not found in the graph"))?;

    let (name, paths): (&'static str, ShortestPaths) = match algorithm {
        PathAlgorithm::Dijkstra => (
            "dijkstra",
            algorithms::dijkstra(&graph, source)
                .context("dijkstra failed")?,
        ),
        PathAlgorithm::BellmanFord => (
            "bellman-ford",
            algorithms::bellman_ford(&graph.arcs(), graph.vertex_count(), source)
                .context("bellman-ford failed")?,
        ),
    };

    let distances = paths
        .iter()
        .filter_map(|(node, distance)| {
            graph.key(node).map(|vertex| DistanceEntry {
                vertex: vertex.clone(),
                distance,
            })
        })
        .collect();

    let path_output = match to {
        Some(target) => {
            let target_id = graph
                .node_id(&target.to_string())
                .ok_or_else(|| anyhow!("target vertex '{target}' not found in the graph"))?;
            let vertices = paths
                .path_to(target_id)
                .map(|nodes| graph.map_nodes_to_keys(&nodes))
                .unwrap_or_default();
            Some(PathOutput {
                to: target.to_string(),
                vertices,
                length: paths.distance(target_id).finite(),
            })
        }
        None => None,
    };

    let output = ShortestOutput {
        algorithm: name,
        start: start.to_string(),
        distances,
        path: path_output,
    };

    print_output(&output, opts, |output| {
        println!("Shortest distances from {} ({}):", output.start, output.algorithm);
        let mut tw =
            TabWriter::new(vec![("Vertex", Align::Left), ("Distance", Align::Right)]).indent("  ");
        for entry in &output.distances {
            tw.row(vec![entry.vertex.clone(), entry.distance.to_string()]);
        }
        tw.print();

        if let Some(path) = &output.path {
            match path.length {
                Some(length) => println!(
                    "\nPath to {}: {} (length {length})",
                    path.to,
                    join_path(&path.vertices)
                ),
                None => println!("\n{} is unreachable from {}", path.to, output.start),
            }
        }
    })
}

pub fn run_all_pairs(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let distances = graph.floyd_warshall().context("floyd-warshall failed")?;

    let output = AllPairsOutput {
        vertices: graph.vertices().cloned().collect(),
        distances,
    };

    print_output(&output, opts, |output| {
        let mut columns = vec![("", Align::Left)];
        columns.extend(output.vertices.iter().map(|v| (v.as_str(), Align::Right)));
        let mut tw = TabWriter::new(columns);

        for (vertex, row) in output.vertices.iter().zip(output.distances.rows()) {
            let mut cells = vec![vertex.clone()];
            cells.extend(row.iter().map(ToString::to_string));
            tw.row(cells);
        }
        tw.print();
    })
}
