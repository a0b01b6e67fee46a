//! Forest Run Configuration

use serde::{Deserialize, Serialize};

use crate::graph::Traversal;

/// Options for a [`ForestBuilder`](super::ForestBuilder) run.
///
/// Deserializes from a table such as `{ "traversal": "breadth_first" }`;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Frontier order used by the cycle check.
    pub traversal: Traversal,
}

impl ForestConfig {
    /// Set the frontier order used by the cycle check.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }
}
