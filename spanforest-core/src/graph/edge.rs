//! Vertices and Edges
//!
//! This module defines the value types stored in both graph representations.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a vertex in a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    /// Create a vertex ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A weighted, directed connection between two vertices.
///
/// Edges are immutable once created. Two edges are equal when source, sink
/// and weight all match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    source: VertexId,
    sink: VertexId,
    weight: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: impl Into<VertexId>, sink: impl Into<VertexId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            sink: sink.into(),
            weight,
        }
    }

    /// The vertex this edge leaves from.
    pub fn source(&self) -> &VertexId {
        &self.source
    }

    /// The vertex this edge points to.
    pub fn sink(&self) -> &VertexId {
        &self.sink
    }

    /// The edge weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Check whether this edge connects `source` to `sink`, ignoring weight.
    pub fn connects(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.source == *source && self.sink == *sink
    }

    /// Check whether the edge starts and ends at the same vertex.
    pub fn is_loop(&self) -> bool {
        self.source == self.sink
    }

    /// The same edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.sink.clone(),
            sink: self.source.clone(),
            weight: self.weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.sink, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(Edge::new("a", "b", 1.0), Edge::new("a", "b", 1.0));
        assert_ne!(Edge::new("a", "b", 1.0), Edge::new("a", "b", 2.0));
        assert_ne!(Edge::new("a", "b", 1.0), Edge::new("b", "a", 1.0));
    }

    #[test]
    fn connects_ignores_weight() {
        let edge = Edge::new("a", "b", 3.5);
        assert!(edge.connects(&"a".into(), &"b".into()));
        assert!(!edge.connects(&"b".into(), &"a".into()));
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let edge = Edge::new("a", "b", 2.0).reversed();
        assert_eq!(edge.source().as_str(), "b");
        assert_eq!(edge.sink().as_str(), "a");
        assert_eq!(edge.weight(), 2.0);
    }

    #[test]
    fn vertex_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&Edge::new("a", "b", 1.0)).unwrap();
        assert_eq!(json, r#"{"source":"a","sink":"b","weight":1.0}"#);
    }
}
