//! Step log.
//!
//! An algorithm run is planned up front as a finite, fully materialized
//! sequence of immutable steps. Each step carries a human-readable
//! description plus the property patches to apply to the live graph when the
//! step is reached. Pre-materializing the whole log is what makes replay by
//! index and mid-run inspection possible; it must never become a lazy
//! generator.

use crate::types::{Color, VertexId};

/// Partial update to a vertex's presentation state. Absent fields are left
/// untouched when the patch is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexPatch {
    pub color: Option<Color>,
    pub in_mst: Option<bool>,
}

impl VertexPatch {
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Color plus MST membership in one patch.
    pub fn committed(color: Color) -> Self {
        Self {
            color: Some(color),
            in_mst: Some(true),
        }
    }
}

/// Partial update to an edge's presentation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgePatch {
    pub color: Option<Color>,
    pub in_mst: Option<bool>,
}

impl EdgePatch {
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn committed(color: Color) -> Self {
        Self {
            color: Some(color),
            in_mst: Some(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexChange {
    pub id: VertexId,
    pub patch: VertexPatch,
}

/// Addressed by unordered endpoint pair, like the edges themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeChange {
    pub from: VertexId,
    pub to: VertexId,
    pub patch: EdgePatch,
}

/// One discrete, replayable unit of an algorithm run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub description: String,
    pub vertex_changes: Vec<VertexChange>,
    pub edge_changes: Vec<EdgeChange>,
}

impl Step {
    /// A step with no property changes, description only.
    pub fn note(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            vertex_changes: Vec::new(),
            edge_changes: Vec::new(),
        }
    }

    pub fn with_vertex(mut self, id: VertexId, patch: VertexPatch) -> Self {
        self.vertex_changes.push(VertexChange { id, patch });
        self
    }

    pub fn with_edge(mut self, from: VertexId, to: VertexId, patch: EdgePatch) -> Self {
        self.edge_changes.push(EdgeChange { from, to, patch });
        self
    }
}

/// The ordered, pre-computed record of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
