//! Edge-List Graph
//!
//! The input graph handed to the forest builder. Each declared vertex maps to
//! the ordered list of its outgoing edges.
//!
//! Vertices are kept in insertion order, so every walk over the graph (and
//! therefore every forest built from it) is deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::edge::{Edge, VertexId};
use crate::error::{Error, Result};

/// Adjacency-list graph keyed by vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<VertexId, Vec<Edge>>", into = "IndexMap<VertexId, Vec<Edge>>")]
pub struct EdgeListGraph {
    /// Outgoing edges of every declared vertex.
    vertices: IndexMap<VertexId, Vec<Edge>>,
}

impl EdgeListGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(vertices),
        }
    }

    /// Register a vertex with no outgoing edges.
    ///
    /// Registering an existing vertex again clears its outgoing edges.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) {
        self.vertices.insert(id.into(), Vec::new());
    }

    /// Append an edge to the outgoing list of `source`.
    ///
    /// The source must have been registered with [`add_vertex`](Self::add_vertex);
    /// the sink does not.
    pub fn add_edge(
        &mut self,
        source: impl Into<VertexId>,
        sink: impl Into<VertexId>,
        weight: f64,
    ) -> Result<()> {
        self.push_edge(Edge::new(source, sink, weight))
    }

    fn push_edge(&mut self, edge: Edge) -> Result<()> {
        if !edge.weight().is_finite() {
            return Err(Error::InvalidWeight {
                from: edge.source().clone(),
                to: edge.sink().clone(),
                weight: edge.weight(),
            });
        }

        match self.vertices.get_mut(edge.source()) {
            Some(edges) => {
                edges.push(edge);
                Ok(())
            }
            None => Err(Error::UnknownVertex(edge.source().clone())),
        }
    }

    /// Iterate over all declared vertices.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> + '_ {
        self.vertices.keys()
    }

    /// Get the outgoing edges of a vertex, or `None` if it was never declared.
    pub fn edges_from(&self, vertex: &str) -> Option<&[Edge]> {
        self.vertices.get(vertex).map(Vec::as_slice)
    }

    /// Iterate over every edge, vertex by vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices.values().flatten()
    }

    /// Check whether a vertex was declared.
    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Number of declared vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of stored edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vec::len).sum()
    }

    /// Check whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn adjacency(&self) -> &IndexMap<VertexId, Vec<Edge>> {
        &self.vertices
    }
}

impl TryFrom<IndexMap<VertexId, Vec<Edge>>> for EdgeListGraph {
    type Error = Error;

    fn try_from(adjacency: IndexMap<VertexId, Vec<Edge>>) -> Result<Self> {
        let mut graph = Self::with_capacity(adjacency.len());
        for vertex in adjacency.keys() {
            graph.add_vertex(vertex.clone());
        }

        for (vertex, edges) in adjacency {
            for edge in edges {
                // An edge filed under another vertex's key would break the
                // source lookup used when edges are consumed.
                if *edge.source() != vertex {
                    return Err(Error::UnknownVertex(edge.source().clone()));
                }
                graph.push_edge(edge)?;
            }
        }

        Ok(graph)
    }
}

impl From<EdgeListGraph> for IndexMap<VertexId, Vec<Edge>> {
    fn from(graph: EdgeListGraph) -> Self {
        graph.vertices
    }
}
