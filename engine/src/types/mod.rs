use serde::{Deserialize, Serialize};

/// Dense, monotonically assigned vertex identifier.
///
/// Ids are never reused within a graph instance; `Graph::clear` restarts
/// allocation at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub u32);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation state of a vertex or edge.
///
/// Rendering collaborators map variants onto a concrete palette; the engine
/// only cares about the three semantic states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    /// Not part of the current run's working set.
    Default,
    /// Highlighted while an algorithm weighs the element.
    Considering,
    /// Committed to the minimum spanning tree.
    InMst,
}

impl Default for Color {
    fn default() -> Self {
        Color::Default
    }
}

/// Lifecycle of a single algorithm run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No step log planned yet.
    Idle,
    /// Step log populated, no step applied.
    Planned,
    /// At least one step applied, more remain.
    Stepping,
    /// Final step applied.
    Complete,
}

/// An edge accepted into the MST, recorded in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MstEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: u32,
}

impl MstEdge {
    /// Whether this record refers to the same unordered endpoint pair.
    pub fn same_pair(&self, from: VertexId, to: VertexId) -> bool {
        (self.from == from && self.to == to) || (self.from == to && self.to == from)
    }
}

/// Derive a display label from a vertex id: `0 -> "A"`, `25 -> "Z"`, then
/// bijective base-26 (`26 -> "AA"`, `27 -> "AB"`, ...).
pub fn vertex_label(id: VertexId) -> String {
    let mut n = id.0 as u64 + 1; // shift to 1-based for bijective numeration
    let mut buf = Vec::new();
    while n > 0 {
        n -= 1;
        buf.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
