//! DOT format output for graph visualization.
//!
//! This module renders [`Graph`]s in the Graphviz DOT language, which can be
//! turned into images with `dot -Tsvg`.

use std::{fmt::Write, hash::Hash};

use crate::graph::Graph;

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// This function handles all characters that have special meaning in DOT format,
/// including quotes, backslashes, newlines, and angle brackets.
///
/// # Arguments
///
/// * `s` - The string to escape
///
/// # Returns
///
/// A new string with all special characters properly escaped.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::escape_dot;
///
/// let escaped = escape_dot("say \"hi\"");
/// assert_eq!(escaped, "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Renders a keyed graph as DOT.
///
/// Vertices are emitted as `n<index>` with the key as label so that keys which
/// are not valid DOT identifiers still render.
pub(crate) fn render<K>(graph: &Graph<K>, title: Option<&str>) -> String
where
    K: Hash + Eq + Clone + std::fmt::Display,
{
    let (keyword, connector) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut dot = String::new();
    let _ = writeln!(dot, "{keyword} G {{");
    if let Some(name) = title {
        let _ = writeln!(dot, "    label=\"{}\";", escape_dot(name));
        dot.push_str("    labelloc=t;\n");
    }
    dot.push_str("    node [shape=circle, fontname=\"Courier\", fontsize=10];\n");
    dot.push_str("    edge [fontname=\"Courier\", fontsize=9];\n\n");

    for (node, key) in graph.inner().nodes() {
        let _ = writeln!(
            dot,
            "    {node} [label=\"{}\"];",
            escape_dot(&key.to_string())
        );
    }

    dot.push('\n');

    // Undirected edges are stored twice, only the primary arc is drawn
    for edge in graph.edge_list() {
        let _ = writeln!(
            dot,
            "    {} {connector} {} [label=\"{}\"];",
            edge.source, edge.target, edge.weight
        );
    }

    dot.push_str("}\n");
    dot
}
