//! Prim's algorithm planner.

use super::Planner;
use crate::graph::Graph;
use crate::steps::{EdgePatch, Step, StepLog, VertexPatch};
use crate::types::{Color, VertexId};
use std::collections::HashSet;

/// Grows the tree one vertex at a time from the first-inserted vertex,
/// always crossing the cheapest edge from the visited set to the rest.
///
/// Tie-break is deterministic: visited vertices are scanned in the order
/// they entered the tree, each vertex's incident edges in insertion order,
/// and only a strictly smaller weight displaces the current candidate.
pub struct PrimPlanner;

impl Planner for PrimPlanner {
    fn name(&self) -> &'static str {
        "Prim's"
    }

    fn description(&self) -> &'static str {
        "Prim's algorithm builds the MST by adding the minimum weight edge \
         that connects a vertex in the tree to a vertex outside the tree."
    }

    fn plan(&self, graph: &Graph) -> StepLog {
        let mut log = StepLog::new();
        let Some(start) = graph.vertices().first() else {
            return log;
        };

        let mut visited: Vec<VertexId> = vec![start.id];
        let mut in_tree: HashSet<VertexId> = HashSet::from([start.id]);

        log.push(
            Step::note(format!(
                "Starting Prim's algorithm from vertex {}",
                start.label
            ))
            .with_vertex(start.id, VertexPatch::committed(Color::InMst)),
        );

        while visited.len() < graph.vertex_count() {
            let mut candidate: Option<(VertexId, VertexId, u32, VertexId)> = None;

            for &tree_vertex in &visited {
                for edge in graph.edges_for_vertex(tree_vertex) {
                    let other = edge.other_endpoint(tree_vertex);
                    if in_tree.contains(&other) {
                        continue;
                    }
                    let is_better = match candidate {
                        Some((_, _, best_weight, _)) => edge.weight < best_weight,
                        None => true,
                    };
                    if is_better {
                        candidate = Some((edge.from, edge.to, edge.weight, other));
                    }
                }
            }

            let Some((from, to, weight, next_vertex)) = candidate else {
                log.push(Step::note("Graph is disconnected. Cannot complete MST."));
                break;
            };

            let edge_name = format!("{}-{}", graph.label_of(from), graph.label_of(to));
            log.push(
                Step::note(format!(
                    "Considering edge {edge_name} with weight {weight}"
                ))
                .with_edge(from, to, EdgePatch::color(Color::Considering)),
            );
            log.push(
                Step::note(format!("Adding edge {edge_name} to MST"))
                    .with_vertex(next_vertex, VertexPatch::committed(Color::InMst))
                    .with_edge(from, to, EdgePatch::committed(Color::InMst)),
            );

            visited.push(next_vertex);
            in_tree.insert(next_vertex);
        }

        log.push(Step::note(format!(
            "Prim's algorithm complete. MST has {} vertices and {} edges.",
            visited.len(),
            visited.len() - 1
        )));
        log
    }
}
