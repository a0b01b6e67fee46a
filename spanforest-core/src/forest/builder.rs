//! Forest Builder
//!
//! Kruskal-style construction of a minimum spanning forest.
//!
//! # Algorithm
//!
//! 1. Collect the distinct edges of the graph and stable-sort them by weight.
//! 2. Make two working graphs: `pending`, a copy of the input from which
//!    accepted edges are consumed, and `spanned`, which starts with no edges
//!    and links every accepted edge in both directions.
//! 3. Walk the sorted edges until the forest holds `|V| - 1` of them:
//!    - A self-loop always closes a cycle and is dropped.
//!    - Fast path: if either endpoint has not been touched by an accepted
//!      edge, it is isolated in the forest and no cycle is possible.
//!    - Slow path: both endpoints are touched. The edge closes a cycle
//!      exactly when its sink is already reachable from its source in
//!      `spanned`. Such edges are dropped.
//!
//! Running out of edges before the forest is full means the input is
//! disconnected. The partial forest is still returned.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::config::ForestConfig;
use crate::error::Result;
use crate::graph::{reachable_with, Edge, EdgeListGraph, TraversalGraph, VertexId};

/// The outcome of a forest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningForest {
    /// Accepted edges, in the order they were accepted.
    edges: Vec<Edge>,

    /// Edges rejected because they would have closed a cycle.
    dropped: Vec<Edge>,

    /// Number of distinct vertices in the input graph.
    vertex_count: usize,
}

impl SpanningForest {
    /// The accepted edges, lightest first.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges that were considered and rejected as cycle-closing.
    pub fn dropped(&self) -> &[Edge] {
        &self.dropped
    }

    /// Number of distinct vertices the forest spans.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check whether no edge was accepted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the accepted edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Number of trees in the forest, counting isolated vertices.
    pub fn component_count(&self) -> usize {
        self.vertex_count.saturating_sub(self.edges.len())
    }

    /// Check whether the forest is a single spanning tree.
    pub fn is_spanning(&self) -> bool {
        self.component_count() <= 1
    }

    /// Consume the report, keeping only the accepted edges.
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

impl IntoIterator for SpanningForest {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// Builds minimum spanning forests with a given configuration.
#[derive(Debug, Clone, Default)]
pub struct ForestBuilder {
    config: ForestConfig,
}

impl ForestBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: ForestConfig) -> Self {
        Self { config }
    }

    /// Get the builder's configuration.
    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    /// Build a minimum spanning forest of `graph`.
    ///
    /// The input graph is only read. Fails with
    /// [`Error::RemovalInconsistency`](crate::Error::RemovalInconsistency) if
    /// an accepted edge cannot be consumed from the working copy.
    pub fn build(&self, graph: &EdgeListGraph) -> Result<SpanningForest> {
        let span = tracing::debug_span!(
            "build_forest",
            vertices = graph.vertex_count(),
            edges = graph.edge_count()
        );
        let _enter = span.enter();

        let vertex_count = distinct_vertex_count(graph);
        let target = vertex_count.saturating_sub(1);
        let candidates = sorted_distinct_edges(graph);

        let mut pending = TraversalGraph::copy_from(graph);
        let mut spanned = TraversalGraph::with_vertices_of(graph);
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut edges = Vec::with_capacity(target);
        let mut dropped = Vec::new();

        for edge in candidates {
            if edges.len() == target {
                break;
            }

            let (source, sink) = (edge.source(), edge.sink());

            if edge.is_loop() {
                tracing::debug!(%edge, "dropped self-loop");
                dropped.push(edge);
                continue;
            }

            let fast_path = !visited.contains(source) || !visited.contains(sink);
            if !fast_path && reachable_with(&spanned, source, sink, self.config.traversal) {
                tracing::debug!(%edge, "dropped cycle-closing edge");
                dropped.push(edge);
                continue;
            }

            if let Err(err) = pending.remove_edge(source, source, sink) {
                tracing::error!(%edge, %err, "working copy out of sync with accepted edges");
                return Err(err);
            }
            spanned.link(&edge);
            visited.insert(source.clone());
            visited.insert(sink.clone());

            tracing::debug!(%edge, fast_path, "accepted");
            edges.push(edge);
        }

        if edges.len() < target {
            tracing::warn!(
                accepted = edges.len(),
                expected = target,
                "graph is disconnected, returning a partial forest"
            );
        }

        Ok(SpanningForest {
            edges,
            dropped,
            vertex_count,
        })
    }
}

/// Build a minimum spanning forest of `graph` with the default configuration.
pub fn build_forest(graph: &EdgeListGraph) -> Result<SpanningForest> {
    ForestBuilder::default().build(graph)
}

/// Count declared vertices plus sinks that were never declared.
fn distinct_vertex_count(graph: &EdgeListGraph) -> usize {
    let mut seen: HashSet<&VertexId> = graph.vertices().collect();
    seen.extend(graph.edges().map(Edge::sink));
    seen.len()
}

/// Distinct edges in vertex order, stable-sorted by weight.
fn sorted_distinct_edges(graph: &EdgeListGraph) -> Vec<Edge> {
    let mut seen = HashSet::new();
    let mut edges: Vec<Edge> = graph
        .edges()
        .filter(|edge| seen.insert((edge.source(), edge.sink(), weight_key(edge.weight()))))
        .cloned()
        .collect();

    edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
    edges
}

/// Hashable form of a finite weight, equal exactly when the weights are.
fn weight_key(weight: f64) -> u64 {
    if weight == 0.0 {
        0
    } else {
        weight.to_bits()
    }
}
