//! Traversal Graph
//!
//! A mutable working copy of an [`EdgeListGraph`], owned by a single forest
//! run. Edges are consumed from it in place while the forest grows, and the
//! reachability check walks whatever edges remain.
//!
//! # Copy/Consume Protocol
//!
//! 1. [`TraversalGraph::copy_from`] deep-copies every vertex and its edges.
//!    Nothing is shared with the input graph.
//! 2. [`TraversalGraph::remove_edge`] consumes one edge, matched by its
//!    endpoints only. A missing edge is an [`Error::RemovalInconsistency`].
//!
//! [`TraversalGraph::with_vertices_of`] and [`TraversalGraph::link`] build the
//! opposite kind of working graph: one that starts empty and grows, storing
//! each linked edge in both directions so reachability becomes connectivity.

use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::edge::{Edge, VertexId};
use super::edge_list::EdgeListGraph;
use crate::error::{Error, Result};

/// Order in which the reachability check expands its frontier.
///
/// The order never changes the answer, only how much work is done before it
/// is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Expand the most recently discovered vertex first (stack).
    #[default]
    DepthFirst,
    /// Expand vertices in discovery order (queue).
    BreadthFirst,
}

/// Per-run working copy of a graph with removable edges.
#[derive(Debug, Clone, Default)]
pub struct TraversalGraph {
    vertices: IndexMap<VertexId, Vec<Edge>>,
}

impl TraversalGraph {
    /// Deep-copy every vertex and edge of `graph`.
    pub fn copy_from(graph: &EdgeListGraph) -> Self {
        Self {
            vertices: graph.adjacency().clone(),
        }
    }

    /// Copy the vertices of `graph` with every edge list left empty.
    pub fn with_vertices_of(graph: &EdgeListGraph) -> Self {
        let vertices = graph
            .vertices()
            .map(|vertex| (vertex.clone(), Vec::new()))
            .collect();
        Self { vertices }
    }

    /// Record `edge` as a connection usable in both directions.
    ///
    /// Vertices not yet present are added.
    pub fn link(&mut self, edge: &Edge) {
        let reversed = edge.reversed();
        self.vertices
            .entry(edge.source().clone())
            .or_default()
            .push(edge.clone());
        self.vertices
            .entry(reversed.source().clone())
            .or_default()
            .push(reversed);
    }

    /// Remove the first edge under `vertex` that runs from `source` to `sink`.
    ///
    /// The remaining edges keep their order. Returns the removed edge.
    pub fn remove_edge(
        &mut self,
        vertex: &VertexId,
        source: &VertexId,
        sink: &VertexId,
    ) -> Result<Edge> {
        let inconsistency = || Error::RemovalInconsistency {
            vertex: vertex.clone(),
            from: source.clone(),
            to: sink.clone(),
        };

        let edges = self.vertices.get_mut(vertex).ok_or_else(inconsistency)?;
        let position = edges
            .iter()
            .position(|edge| edge.connects(source, sink))
            .ok_or_else(inconsistency)?;

        Ok(edges.remove(position))
    }

    /// Get the remaining outgoing edges of a vertex.
    pub fn edges_from(&self, vertex: &str) -> Option<&[Edge]> {
        self.vertices.get(vertex).map(Vec::as_slice)
    }

    /// Check whether the vertex has an entry, even an empty one.
    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Number of vertex entries.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges not yet removed.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }
}

/// Check whether `to` can be reached from `from` by following outgoing edges.
///
/// Uses a depth-first walk. See [`reachable_with`].
pub fn reachable(graph: &TraversalGraph, from: &VertexId, to: &VertexId) -> bool {
    reachable_with(graph, from, to, Traversal::DepthFirst)
}

/// Check whether `to` can be reached from `from`, expanding the frontier in
/// the given order.
///
/// Returns `true` as soon as an edge into `to` is seen. A start vertex that is
/// unknown or has no outgoing edges reaches nothing. Every vertex is expanded
/// at most once, so the walk is O(V + E) and terminates on cyclic graphs.
pub fn reachable_with(
    graph: &TraversalGraph,
    from: &VertexId,
    to: &VertexId,
    order: Traversal,
) -> bool {
    let mut visited: HashSet<&VertexId> = HashSet::new();
    let mut frontier: VecDeque<&VertexId> = VecDeque::new();

    visited.insert(from);
    frontier.push_back(from);

    loop {
        let next = match order {
            Traversal::DepthFirst => frontier.pop_back(),
            Traversal::BreadthFirst => frontier.pop_front(),
        };
        let Some(vertex) = next else {
            break;
        };

        let Some(edges) = graph.vertices.get(vertex) else {
            continue;
        };

        for edge in edges {
            if edge.sink() == to {
                tracing::trace!(%from, %to, via = %vertex, "path found");
                return true;
            }
            if visited.insert(edge.sink()) {
                frontier.push_back(edge.sink());
            }
        }
    }

    tracing::trace!(%from, %to, explored = visited.len(), "no path");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// a -> b -> c, with c declared but empty.
    fn chain() -> EdgeListGraph {
        let mut graph = EdgeListGraph::new();
        for vertex in ["a", "b", "c"] {
            graph.add_vertex(vertex);
        }
        graph.add_edge("a", "b", 1.0).unwrap();
        graph.add_edge("b", "c", 1.0).unwrap();
        graph
    }

    fn id(name: &str) -> VertexId {
        VertexId::from(name)
    }

    #[test]
    fn copy_keeps_every_vertex() {
        let copy = TraversalGraph::copy_from(&chain());
        assert!(copy.contains_vertex("a"));
        assert!(copy.contains_vertex("b"));
        assert!(copy.contains_vertex("c"));
        assert_eq!(copy.edge_count(), 2);
    }

    #[test]
    fn copy_is_independent_of_the_source() {
        let graph = chain();
        let mut copy = TraversalGraph::copy_from(&graph);
        copy.remove_edge(&id("a"), &id("a"), &id("b")).unwrap();

        assert_eq!(copy.edges_from("a").unwrap().len(), 0);
        assert_eq!(graph.edges_from("a").unwrap().len(), 1);
    }

    #[test]
    fn empty_copy_keeps_vertices_only() {
        let copy = TraversalGraph::with_vertices_of(&chain());
        assert_eq!(copy.vertex_count(), 3);
        assert_eq!(copy.edge_count(), 0);
    }

    #[test]
    fn remove_matches_endpoints_not_weight() {
        let mut graph = chain();
        graph.add_edge("a", "b", 7.0).unwrap();
        let mut copy = TraversalGraph::copy_from(&graph);

        let removed = copy.remove_edge(&id("a"), &id("a"), &id("b")).unwrap();
        assert_eq!(removed.weight(), 1.0);
        assert_eq!(copy.edges_from("a").unwrap(), &[Edge::new("a", "b", 7.0)]);
    }

    #[test]
    fn remove_reports_missing_edges() {
        let mut copy = TraversalGraph::copy_from(&chain());

        let err = copy.remove_edge(&id("a"), &id("a"), &id("c")).unwrap_err();
        assert_eq!(
            err,
            Error::RemovalInconsistency {
                vertex: id("a"),
                from: id("a"),
                to: id("c"),
            }
        );
        assert!(copy.remove_edge(&id("q"), &id("q"), &id("a")).is_err());
    }

    #[test]
    fn link_stores_both_directions() {
        let mut graph = TraversalGraph::with_vertices_of(&chain());
        graph.link(&Edge::new("a", "z", 2.0));

        assert_eq!(graph.edges_from("a").unwrap(), &[Edge::new("a", "z", 2.0)]);
        assert_eq!(graph.edges_from("z").unwrap(), &[Edge::new("z", "a", 2.0)]);
        assert!(reachable(&graph, &id("z"), &id("a")));
    }

    #[test]
    fn follows_paths_transitively() {
        let copy = TraversalGraph::copy_from(&chain());
        assert!(reachable(&copy, &id("a"), &id("c")));
        assert!(!reachable(&copy, &id("c"), &id("a")));
    }

    #[test]
    fn missing_target_is_unreachable() {
        let copy = TraversalGraph::copy_from(&chain());
        assert!(!reachable(&copy, &id("a"), &id("d")));
    }

    #[test]
    fn vertex_without_edges_reaches_nothing() {
        let copy = TraversalGraph::copy_from(&chain());
        assert!(!reachable(&copy, &id("c"), &id("b")));
        assert!(!reachable(&copy, &id("nowhere"), &id("a")));
    }

    #[test]
    fn terminates_on_cycles() {
        let mut graph = chain();
        graph.add_edge("b", "a", 1.0).unwrap();
        graph.add_vertex("d");
        let copy = TraversalGraph::copy_from(&graph);

        for order in [Traversal::DepthFirst, Traversal::BreadthFirst] {
            assert!(!reachable_with(&copy, &id("a"), &id("d"), order));
            assert!(reachable_with(&copy, &id("b"), &id("c"), order));
        }
    }

    #[test]
    fn removal_cuts_paths() {
        let mut copy = TraversalGraph::copy_from(&chain());
        copy.remove_edge(&id("b"), &id("b"), &id("c")).unwrap();
        assert!(!reachable(&copy, &id("a"), &id("c")));
        assert!(reachable(&copy, &id("a"), &id("b")));
    }

    #[test]
    fn traversal_orders_agree() {
        let mut graph = EdgeListGraph::new();
        for vertex in ["a", "b", "c", "d", "e"] {
            graph.add_vertex(vertex);
        }
        for (source, sink) in [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "b")] {
            graph.add_edge(source, sink, 1.0).unwrap();
        }
        let copy = TraversalGraph::copy_from(&graph);

        for from in ["a", "b", "c", "d", "e"] {
            for to in ["a", "b", "c", "d", "e"] {
                assert_eq!(
                    reachable_with(&copy, &id(from), &id(to), Traversal::DepthFirst),
                    reachable_with(&copy, &id(from), &id(to), Traversal::BreadthFirst),
                    "{from} -> {to}"
                );
            }
        }
    }
}
