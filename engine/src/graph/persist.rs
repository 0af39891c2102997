//! Structural JSON persistence for the graph store.
//!
//! The on-disk document carries topology only; presentation state (color,
//! MST membership) is rebuilt to defaults on import. `nextVertexId` is
//! tolerated absent and defaults to one past the maximum vertex id.

use super::{Edge, Graph, Vertex};
use crate::error::PersistError;
use crate::types::{Color, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Serialized shape of a graph: `{"vertices": [...], "edges": [...],
/// "nextVertexId": n}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDoc {
    pub vertices: Vec<VertexDoc>,
    pub edges: Vec<EdgeDoc>,
    #[serde(rename = "nextVertexId", default, skip_serializing_if = "Option::is_none")]
    pub next_vertex_id: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexDoc {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDoc {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: u32,
}

impl Graph {
    /// Export the structural document. Presentation fields are excluded.
    pub fn to_doc(&self) -> GraphDoc {
        GraphDoc {
            vertices: self
                .vertices
                .iter()
                .map(|v| VertexDoc {
                    id: v.id,
                    x: v.x,
                    y: v.y,
                    label: v.label.clone(),
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| EdgeDoc {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                })
                .collect(),
            next_vertex_id: Some(self.next_vertex_id),
        }
    }

    /// Serialize the structural document to JSON.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(&self.to_doc())?)
    }

    /// Rebuild a graph from a structural document, with default presentation
    /// state everywhere. Rejects duplicate vertex ids and edges whose
    /// endpoints have no vertex record.
    pub fn from_doc(doc: GraphDoc) -> Result<Self, PersistError> {
        let mut seen = HashSet::new();
        for v in &doc.vertices {
            if !seen.insert(v.id) {
                return Err(PersistError::DuplicateVertexId(v.id));
            }
        }
        for e in &doc.edges {
            for endpoint in [e.from, e.to] {
                if !seen.contains(&endpoint) {
                    return Err(PersistError::UnknownEndpoint(endpoint));
                }
            }
        }

        let max_id = doc.vertices.iter().map(|v| v.id.0).max();
        let next_vertex_id = doc
            .next_vertex_id
            .unwrap_or_else(|| max_id.map_or(0, |m| m + 1));

        let graph = Graph {
            vertices: doc
                .vertices
                .into_iter()
                .map(|v| Vertex {
                    id: v.id,
                    x: v.x,
                    y: v.y,
                    label: v.label,
                    color: Color::Default,
                    in_mst: false,
                })
                .collect(),
            edges: doc
                .edges
                .into_iter()
                .map(|e| Edge {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                    color: Color::Default,
                    in_mst: false,
                })
                .collect(),
            next_vertex_id,
        };

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph imported"
        );
        Ok(graph)
    }

    /// Parse and rebuild a graph from its JSON document.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let doc: GraphDoc = serde_json::from_str(json)?;
        Self::from_doc(doc)
    }
}
