//! Serializable graph descriptions.
//!
//! A [`GraphDescription`] is the on-disk form of a [`Graph<String>`]: a kind
//! flag, an optional list of vertices and a list of weighted edges. It can be
//! read from JSON or TOML.
//!
//! # JSON
//!
//! ```json
//! {
//!   "directed": false,
//!   "vertices": ["E"],
//!   "edges": [
//!     { "from": "A", "to": "B", "weight": 1 },
//!     { "from": "B", "to": "C" }
//!   ]
//! }
//! ```
//!
//! # TOML
//!
//! ```toml
//! directed = true
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 3
//! ```
//!
//! Omitted `weight`s default to [`DEFAULT_WEIGHT`], an omitted `directed`
//! defaults to `false` and unknown fields are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    graph::{Graph, GraphKind, Weight, DEFAULT_WEIGHT},
    Error, Result,
};

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

/// One edge of a [`GraphDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDescription {
    /// Source vertex key
    pub from: String,
    /// Target vertex key
    pub to: String,
    /// Edge weight, [`DEFAULT_WEIGHT`] when omitted
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

/// A graph in serializable form.
///
/// # Examples
///
/// ```rust
/// use graphkit::description::GraphDescription;
///
/// let description = GraphDescription::from_json_str(
///     r#"{ "directed": true, "edges": [{ "from": "A", "to": "B", "weight": 2 }] }"#,
/// )?;
/// let graph = description.build()?;
///
/// assert!(graph.is_directed());
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDescription {
    /// `true` for a directed graph
    #[serde(default)]
    pub directed: bool,
    /// Vertices added before any edge, in this order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<String>,
    /// Edges in insertion order
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

impl GraphDescription {
    /// Parses a description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the input is not a valid description.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a description from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] if the input is not a valid description.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Loads a description from a `.json` or `.toml` file.
    ///
    /// The format is chosen by the (case-insensitive) file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for other extensions, [`Error::Io`]
    /// if the file cannot be read, and a parse error for invalid content.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match format.as_deref() {
            Some("json") => {
                log::debug!("loading JSON graph description from {}", path.display());
                Self::from_json_str(&std::fs::read_to_string(path)?)
            }
            Some("toml") => {
                log::debug!("loading TOML graph description from {}", path.display());
                Self::from_toml_str(&std::fs::read_to_string(path)?)
            }
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Serializes the description as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The kind of graph this description builds.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        if self.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }

    /// Builds the graph: listed vertices first, in order, then every edge.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Graph::add_edge`].
    pub fn build(&self) -> Result<Graph<String>> {
        let mut graph = Graph::with_capacity(self.kind(), self.vertices.len(), self.edges.len());
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone());
        }
        for edge in &self.edges {
            graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight)?;
        }

        log::debug!(
            "built {} graph with {} vertices and {} edges",
            graph.kind(),
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl From<&Graph<String>> for GraphDescription {
    /// Describes a graph. Every vertex is listed so isolated vertices survive a round trip.
    fn from(graph: &Graph<String>) -> Self {
        let edges = graph
            .edge_list()
            .into_iter()
            .filter_map(|edge| {
                Some(EdgeDescription {
                    from: graph.key(edge.source)?.clone(),
                    to: graph.key(edge.target)?.clone(),
                    weight: edge.weight,
                })
            })
            .collect();

        GraphDescription {
            directed: graph.is_directed(),
            vertices: graph.vertices().cloned().collect(),
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_defaults() {
        let description =
            GraphDescription::from_json_str(r#"{ "edges": [{ "from": "A", "to": "B" }] }"#)
                .unwrap();
        assert!(!description.directed);
        assert!(description.vertices.is_empty());
        assert_eq!(description.edges[0].weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        let result = GraphDescription::from_json_str(r#"{ "nodes": [] }"#);
        assert!(matches!(result, Err(Error::Json(_))));

        let result =
            GraphDescription::from_json_str(r#"{ "edges": [{ "from": "A", "to": "B", "w": 1 }] }"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_toml() {
        let input = r#"
directed = true
vertices = ["Z"]

[[edges]]
from = "A"
to = "B"
weight = -3
"#;
        let description = GraphDescription::from_toml_str(input).unwrap();
        assert!(description.directed);
        assert_eq!(description.vertices, vec!["Z"]);
        assert_eq!(
            description.edges,
            vec![EdgeDescription {
                from: "A".into(),
                to: "B".into(),
                weight: -3
            }]
        );
    }

    #[test]
    fn test_invalid_toml() {
        let result = GraphDescription::from_toml_str("directed = maybe");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_build_vertex_order() {
        let description = GraphDescription {
            directed: true,
            vertices: vec!["C".into(), "A".into()],
            edges: vec![EdgeDescription {
                from: "A".into(),
                to: "B".into(),
                weight: 2,
            }],
        };
        let graph = description.build().unwrap();
        assert!(graph.is_directed());
        assert_eq!(
            graph.vertices().cloned().collect::<Vec<_>>(),
            vec!["C", "A", "B"]
        );
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_from_graph() {
        let mut graph: Graph<String> = Graph::undirected();
        graph.add_edge("A".into(), "B".into(), 4).unwrap();
        graph.add_vertex("C".into());

        let description = GraphDescription::from(&graph);
        assert!(!description.directed);
        assert_eq!(description.vertices, vec!["A", "B", "C"]);
        assert_eq!(description.edges.len(), 1);

        let rebuilt = description.build().unwrap();
        assert_eq!(rebuilt.to_string(), graph.to_string());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = GraphDescription::from_path("graph.yaml");
        assert!(matches!(result, Err(Error::UnsupportedFormat(p)) if p == "graph.yaml"));
    }

    #[test]
    fn test_missing_file() {
        let result = GraphDescription::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
