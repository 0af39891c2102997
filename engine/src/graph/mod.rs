//! Graph store.
//!
//! Owns the vertex and edge collections, their identity, and the per-element
//! presentation state the step engine patches during replay. Collections are
//! insertion-ordered vectors; planners rely on that order for deterministic
//! tie-breaking, so it is part of the contract, not an implementation detail.

mod persist;

pub use persist::{EdgeDoc, GraphDoc, VertexDoc};

use crate::steps::{EdgePatch, VertexPatch};
use crate::types::{vertex_label, Color, VertexId};
use std::collections::{HashSet, VecDeque};

/// A vertex with its presentation state.
///
/// `x`/`y` are canvas coordinates with no algorithmic meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: Color,
    pub in_mst: bool,
}

impl Vertex {
    /// Merge a patch: only fields present in the patch override.
    pub fn apply_patch(&mut self, patch: &VertexPatch) {
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(in_mst) = patch.in_mst {
            self.in_mst = in_mst;
        }
    }
}

/// An undirected weighted edge. The `(from, to)` pair is unordered: the edge
/// A-B and the edge B-A are the same edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: u32,
    pub color: Color,
    pub in_mst: bool,
}

impl Edge {
    /// Whether this edge connects the given unordered pair.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Whether this edge touches the given vertex.
    pub fn touches(&self, id: VertexId) -> bool {
        self.from == id || self.to == id
    }

    /// The endpoint opposite `id`. For a self-loop this is `id` itself.
    pub fn other_endpoint(&self, id: VertexId) -> VertexId {
        if self.from == id {
            self.to
        } else {
            self.from
        }
    }

    /// Merge a patch: only fields present in the patch override.
    pub fn apply_patch(&mut self, patch: &EdgePatch) {
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(in_mst) = patch.in_mst {
            self.in_mst = in_mst;
        }
    }
}

/// The in-memory graph the engine plans against and patches during replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    next_vertex_id: u32,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex at the given position, assigning the next sequential id
    /// and a label derived from it.
    pub fn add_vertex(&mut self, x: f64, y: f64) -> VertexId {
        let id = VertexId(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.push(Vertex {
            id,
            x,
            y,
            label: vertex_label(id),
            color: Color::Default,
            in_mst: false,
        });
        id
    }

    /// Add an edge between an unordered vertex pair, or overwrite the weight
    /// of the existing edge for that pair. Returns the edge's index in
    /// insertion order.
    ///
    /// Self-loops and weight policy (minimum 1) are enforced by the editing
    /// collaborator, not here.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: u32) -> usize {
        if let Some(pos) = self.edges.iter().position(|e| e.connects(from, to)) {
            self.edges[pos].weight = weight;
            return pos;
        }
        self.edges.push(Edge {
            from,
            to,
            weight,
            color: Color::Default,
            in_mst: false,
        });
        self.edges.len() - 1
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.iter_mut().find(|v| v.id == id)
    }

    pub fn edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(from, to))
    }

    pub fn edge_mut(&mut self, from: VertexId, to: VertexId) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.connects(from, to))
    }

    /// All edges touching the vertex, in edge-insertion order.
    pub fn edges_for_vertex(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.touches(id))
    }

    /// Neighbor ids of the vertex, in the same order as `edges_for_vertex`.
    pub fn adjacent(&self, id: VertexId) -> Vec<VertexId> {
        self.edges_for_vertex(id)
            .map(|e| e.other_endpoint(id))
            .collect()
    }

    /// Display label for a vertex id, falling back to the raw id for
    /// vertices that no longer exist.
    pub fn label_of(&self, id: VertexId) -> String {
        match self.vertex(id) {
            Some(v) => v.label.clone(),
            None => id.to_string(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn next_vertex_id(&self) -> u32 {
        self.next_vertex_id
    }

    /// Restore every vertex and edge to default color with MST membership
    /// cleared. Topology and weights are untouched.
    pub fn reset_visual_state(&mut self) {
        for vertex in &mut self.vertices {
            vertex.color = Color::Default;
            vertex.in_mst = false;
        }
        for edge in &mut self.edges {
            edge.color = Color::Default;
            edge.in_mst = false;
        }
    }

    /// Empty the graph and restart id allocation at zero.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.next_vertex_id = 0;
    }

    /// Breadth-first reachability over the undirected adjacency, starting
    /// from the first-inserted vertex. Vacuously true for zero or one vertex.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.vertices.first() else {
            return true;
        };

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([start.id]);
        visited.insert(start.id);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.adjacent(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        visited.len() == self.vertices.len()
    }
}
