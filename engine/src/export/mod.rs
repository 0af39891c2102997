//! Derived, write-only text exports of the graph structure.

use crate::graph::Graph;
use std::fmt::Write;

/// Tab-separated adjacency matrix: a header row of vertex labels, then one
/// row per vertex with edge weights, `0` where no edge exists.
pub fn adjacency_matrix(graph: &Graph) -> String {
    let mut out = String::new();
    for vertex in graph.vertices() {
        let _ = write!(out, "\t{}", vertex.label);
    }
    out.push('\n');

    for row in graph.vertices() {
        let _ = write!(out, "{}", row.label);
        for col in graph.vertices() {
            let weight = graph.edge(row.id, col.id).map_or(0, |e| e.weight);
            let _ = write!(out, "\t{weight}");
        }
        out.push('\n');
    }
    out
}

/// Flat edge list in insertion order, one `From To Weight` row per edge,
/// endpoints shown as labels.
pub fn edge_list(graph: &Graph) -> String {
    let mut out = String::from("From\tTo\tWeight\n");
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            graph.label_of(edge.from),
            graph.label_of(edge.to),
            edge.weight
        );
    }
    out
}
