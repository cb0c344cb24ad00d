use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// graphkit - run classic graph algorithms on graph description files
#[derive(Debug, Parser)]
#[command(name = "graphkit", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Topological sort algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TopoMethod {
    /// Reverse post-order of a depth-first search
    Dfs,
    /// Kahn's in-degree algorithm
    Kahn,
}

/// Single-source shortest path algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathAlgorithm {
    /// Dijkstra, non-negative weights only
    Dijkstra,
    /// Bellman-Ford, negative weights allowed
    BellmanFord,
}

/// Minimum spanning tree algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MstAlgorithm {
    /// Spanning forest over every component
    Kruskal,
    /// Spanning tree of the start vertex's component
    Prim,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the adjacency list with vertex and edge counts.
    Show {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Render the graph in Graphviz DOT format.
    Dot {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Graph title shown as the DOT label.
        #[arg(long)]
        title: Option<String>,
    },

    /// Breadth-first visitation order.
    Bfs {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Start vertex.
        #[arg(short, long)]
        start: String,
    },

    /// Depth-first (pre-order) visitation order.
    Dfs {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Start vertex.
        #[arg(short, long)]
        start: String,
    },

    /// Topological order of a directed acyclic graph.
    Toposort {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Sorting algorithm.
        #[arg(short, long, value_enum, default_value_t = TopoMethod::Dfs)]
        method: TopoMethod,
    },

    /// Shortest distances from a start vertex.
    Shortest {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Start vertex.
        #[arg(short, long)]
        start: String,

        /// Shortest path algorithm.
        #[arg(short, long, value_enum, default_value_t = PathAlgorithm::Dijkstra)]
        algorithm: PathAlgorithm,

        /// Also print the path to this vertex.
        #[arg(long, value_name = "VERTEX")]
        to: Option<String>,
    },

    /// All-pairs shortest distances (Floyd-Warshall).
    AllPairs {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Minimum spanning tree or forest.
    Mst {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Spanning tree algorithm.
        #[arg(short, long, value_enum, default_value_t = MstAlgorithm::Kruskal)]
        algorithm: MstAlgorithm,

        /// Start vertex for Prim (defaults to the first vertex).
        #[arg(short, long)]
        start: Option<String>,
    },

    /// Check the graph for cycles.
    Cycles {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// List connected components (weakly connected for directed graphs).
    Components {
        /// Graph description file (.json or .toml).
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Run the walkthrough on the built-in sample graphs.
    Demo,
}
