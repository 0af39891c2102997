//! Stepwise algorithm engine.
//!
//! Planning and execution are decoupled: a [`Planner`] simulates an MST
//! algorithm against a read-only view of the graph and emits the full
//! [`StepLog`]; the [`MstRunner`] then applies steps one at a time, mutating
//! the live graph and accumulating the MST edge set. A driving collaborator
//! may pace `advance` calls on a timer; the engine itself is synchronous and
//! single-threaded.

mod disjoint_set;
mod kruskal;
mod prim;

pub use disjoint_set::DisjointSet;
pub use kruskal::KruskalPlanner;
pub use prim::PrimPlanner;

use crate::graph::Graph;
use crate::steps::StepLog;
use crate::types::{MstEdge, RunState};
use std::str::FromStr;
use tracing::debug;

/// An MST algorithm's planning capability.
///
/// `plan` is a pure simulation over current topology: it must not touch the
/// graph's live color or membership fields. Mutation happens only when the
/// runner later applies the planned steps.
pub trait Planner {
    fn name(&self) -> &'static str;

    /// One-sentence summary shown to users when the algorithm is selected.
    fn description(&self) -> &'static str;

    fn plan(&self, graph: &Graph) -> StepLog;
}

/// Algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Prims,
    Kruskals,
}

impl Algorithm {
    pub fn planner(self) -> Box<dyn Planner> {
        match self {
            Algorithm::Prims => Box::new(PrimPlanner),
            Algorithm::Kruskals => Box::new(KruskalPlanner),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Prims => write!(f, "Prim's"),
            Algorithm::Kruskals => write!(f, "Kruskal's"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prim" | "prims" => Ok(Algorithm::Prims),
            "kruskal" | "kruskals" => Ok(Algorithm::Kruskals),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

/// Owns the graph and one algorithm run over it.
pub struct MstRunner {
    graph: Graph,
    planner: Box<dyn Planner>,
    steps: StepLog,
    current: Option<usize>,
    mst_edges: Vec<MstEdge>,
    total_weight: u64,
}

impl MstRunner {
    pub fn new(graph: Graph, algorithm: Algorithm) -> Self {
        Self::with_planner(graph, algorithm.planner())
    }

    /// Run with a custom planner implementation.
    pub fn with_planner(graph: Graph, planner: Box<dyn Planner>) -> Self {
        Self {
            graph,
            planner,
            steps: StepLog::new(),
            current: None,
            mst_edges: Vec::new(),
            total_weight: 0,
        }
    }

    /// Discard the current run: empty step log, no current step, no MST
    /// edges, zero weight, and every graph element back to its default
    /// presentation state.
    pub fn reset(&mut self) {
        self.steps = StepLog::new();
        self.current = None;
        self.mst_edges.clear();
        self.total_weight = 0;
        self.graph.reset_visual_state();
    }

    /// Switch to a different algorithm, discarding any run in progress.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.planner = algorithm.planner();
        self.reset();
    }

    /// Planning phase: compute the full step log for the current topology.
    /// Required before the first `advance`.
    pub fn prepare_algorithm(&mut self) {
        self.steps = self.planner.plan(&self.graph);
        debug!(
            algorithm = self.planner.name(),
            steps = self.steps.len(),
            "run planned"
        );
    }

    /// Apply the next planned step. Returns whether a further step remains;
    /// at the terminal index (or with an empty log) this is a no-op that
    /// returns false.
    pub fn advance(&mut self) -> bool {
        let next = match self.current {
            None => 0,
            Some(i) => i + 1,
        };
        if next >= self.steps.len() {
            return false;
        }
        self.current = Some(next);

        let step = match self.steps.get(next) {
            Some(step) => step,
            None => return false,
        };

        for change in &step.vertex_changes {
            if let Some(vertex) = self.graph.vertex_mut(change.id) {
                vertex.apply_patch(&change.patch);
            }
        }
        for change in &step.edge_changes {
            if let Some(edge) = self.graph.edge_mut(change.from, change.to) {
                edge.apply_patch(&change.patch);
                // At-most-once accumulation: a repeated in-MST patch for the
                // same unordered pair must not double-count the weight.
                if change.patch.in_mst == Some(true)
                    && !self.mst_edges.iter().any(|m| m.same_pair(edge.from, edge.to))
                {
                    self.mst_edges.push(MstEdge {
                        from: edge.from,
                        to: edge.to,
                        weight: edge.weight,
                    });
                    self.total_weight += u64::from(edge.weight);
                }
            }
        }

        next + 1 < self.steps.len()
    }

    /// Reset, plan, then drain every step synchronously.
    pub fn run_to_completion(&mut self) {
        self.reset();
        self.prepare_algorithm();
        while self.advance() {}
    }

    pub fn state(&self) -> RunState {
        match self.current {
            None if self.steps.is_empty() => RunState::Idle,
            None => RunState::Planned,
            Some(i) if i + 1 == self.steps.len() => RunState::Complete,
            Some(_) => RunState::Stepping,
        }
    }

    /// Index of the last applied step; `None` until the first `advance`.
    pub fn current_step_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_step_description(&self) -> Option<&str> {
        self.current
            .and_then(|i| self.steps.get(i))
            .map(|s| s.description.as_str())
    }

    /// MST edges accumulated so far, in application order.
    pub fn mst_edges(&self) -> &[MstEdge] {
        &self.mst_edges
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn steps(&self) -> &StepLog {
        &self.steps
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.planner.name()
    }

    pub fn algorithm_description(&self) -> &'static str {
        self.planner.description()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Edit access to the graph. Structural edits invalidate any planned
    /// run, so the run state is reset first.
    pub fn graph_mut(&mut self) -> &mut Graph {
        self.reset();
        &mut self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}
