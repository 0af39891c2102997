//! Kruskal's algorithm planner.

use super::{DisjointSet, Planner};
use crate::graph::{Edge, Graph};
use crate::steps::{EdgePatch, Step, StepLog, VertexPatch};
use crate::types::{Color, VertexId};
use std::collections::HashMap;

/// Considers edges globally by ascending weight, accepting any edge whose
/// endpoints are still in different sets and skipping those that would close
/// a cycle.
///
/// The sort is stable, so edges of equal weight keep their insertion order;
/// together with the dense union-find remap this makes step logs fully
/// deterministic.
pub struct KruskalPlanner;

impl Planner for KruskalPlanner {
    fn name(&self) -> &'static str {
        "Kruskal's"
    }

    fn description(&self) -> &'static str {
        "Kruskal's algorithm builds the MST by adding the minimum weight edge \
         that doesn't create a cycle."
    }

    fn plan(&self, graph: &Graph) -> StepLog {
        let mut log = StepLog::new();
        if graph.vertex_count() == 0 {
            return log;
        }

        // Dense remap: vertex id -> index in insertion order.
        let index_of: HashMap<VertexId, usize> = graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id, i))
            .collect();
        let mut dsu = DisjointSet::new(graph.vertex_count());

        let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
        sorted.sort_by_key(|e| e.weight);

        log.push(Step::note(format!(
            "Starting Kruskal's algorithm with {} edges sorted by weight",
            sorted.len()
        )));

        let mut own_set = Step::note("Each vertex starts in its own set");
        for vertex in graph.vertices() {
            own_set = own_set.with_vertex(vertex.id, VertexPatch::color(Color::InMst));
        }
        log.push(own_set);

        let mut accepted = 0usize;

        for edge in sorted {
            let edge_name = format!(
                "{}-{}",
                graph.label_of(edge.from),
                graph.label_of(edge.to)
            );
            log.push(
                Step::note(format!(
                    "Considering edge {edge_name} with weight {}",
                    edge.weight
                ))
                .with_edge(edge.from, edge.to, EdgePatch::color(Color::Considering)),
            );

            let root_from = dsu.find(index_of[&edge.from]);
            let root_to = dsu.find(index_of[&edge.to]);

            if root_from != root_to {
                log.push(
                    Step::note(format!("Adding edge {edge_name} to MST"))
                        .with_edge(edge.from, edge.to, EdgePatch::committed(Color::InMst)),
                );
                dsu.union(index_of[&edge.from], index_of[&edge.to]);
                accepted += 1;
                if accepted == graph.vertex_count() - 1 {
                    break;
                }
            } else {
                log.push(
                    Step::note(format!(
                        "Skipping edge {edge_name} (would create a cycle)"
                    ))
                    .with_edge(edge.from, edge.to, EdgePatch::color(Color::Default)),
                );
            }
        }

        if accepted == graph.vertex_count() - 1 {
            log.push(Step::note(format!(
                "Kruskal's algorithm complete. MST has {} vertices and {} edges.",
                graph.vertex_count(),
                accepted
            )));
        } else {
            log.push(Step::note(format!(
                "Graph is disconnected. Found a spanning forest with {} edges \
                 across {} components.",
                accepted,
                dsu.sets()
            )));
        }
        log
    }
}
