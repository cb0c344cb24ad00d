use std::path::Path;

use anyhow::{anyhow, Context};
use graphkit::algorithms::SpanningTree;
use serde::Serialize;

use crate::{
    app::{GlobalOptions, MstAlgorithm},
    commands::common::load_graph,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct MstOutput {
    pub algorithm: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub tree: SpanningTree<String>,
}

pub fn run(
    path: &Path,
    algorithm: MstAlgorithm,
    start: Option<&str>,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    if graph.is_directed() {
        log::warn!("spanning trees assume an undirected graph, arc directions are ignored by kruskal");
    }

    let output = match algorithm {
        MstAlgorithm::Kruskal => MstOutput {
            algorithm: "kruskal",
            start: None,
            tree: graph.kruskal().context("kruskal failed")?,
        },
        MstAlgorithm::Prim => {
            let start = match start {
                Some(start) => start.to_string(),
                None => graph
                    .vertices()
                    .next()
                    .cloned()
                    .ok_or_else(|| anyhow!("graph has no vertices"))?,
            };
            let tree = graph
                .prim(&start)
                .with_context(|| format!("prim from '{start}' failed"))?;
            MstOutput {
                algorithm: "prim",
                start: Some(start),
                tree,
            }
        }
    };

    print_output(&output, opts, |output| {
        match &output.start {
            Some(start) => println!("Minimum spanning tree ({} from {start}):", output.algorithm),
            None => println!("Minimum spanning forest ({}):", output.algorithm),
        }
        let mut tw = TabWriter::new(vec![
            ("From", Align::Left),
            ("To", Align::Left),
            ("Weight", Align::Right),
        ])
        .indent("  ");
        for (u, v, weight) in &output.tree.edges {
            tw.row(vec![u.clone(), v.clone(), weight.to_string()]);
        }
        tw.print();
        println!("Total weight: {}", output.tree.total_weight);
    })
}
