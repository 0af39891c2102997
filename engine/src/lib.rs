//! Stepwise MST engine.
//!
//! Computes minimum spanning trees over small weighted undirected graphs
//! with Prim's or Kruskal's algorithm, not as a single answer but as a
//! pre-planned, replayable sequence of discrete steps. Each step patches
//! vertex/edge presentation state so a visualizing collaborator can show
//! the tree being discovered.

pub mod engine;
pub mod error;
pub mod export;
pub mod graph;
pub mod steps;
pub mod types;

pub use engine::{Algorithm, KruskalPlanner, MstRunner, Planner, PrimPlanner};
pub use error::PersistError;
pub use graph::{Edge, Graph, Vertex};
pub use steps::{EdgePatch, Step, StepLog, VertexPatch};
pub use types::{Color, MstEdge, RunState, VertexId};
