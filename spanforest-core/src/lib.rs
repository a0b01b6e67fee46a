//! Spanforest Core
//!
//! This crate builds minimum spanning forests over weighted graphs whose
//! edges are recorded directionally. It implements:
//!
//! - An input graph keyed by vertex, holding ordered outgoing edges
//! - A per-run working copy whose edges can be consumed in place
//! - A reachability check over the working copy
//! - A Kruskal-style forest builder that uses that check, not union-find,
//!   to reject cycle-closing edges
//!
//! # Architecture
//!
//! - `graph`: vertex and edge types, the input graph and the working copy
//! - `forest`: the builder, its configuration and the resulting forest
//! - `error`: the error type shared by both
//!
//! Accepted and dropped edges are reported as `tracing` events. Install a
//! subscriber to see them.
//!
//! # Example
//!
//! ```rust
//! use spanforest_core::{build_forest, EdgeListGraph};
//!
//! let mut graph = EdgeListGraph::new();
//! for vertex in ["a", "b", "c"] {
//!     graph.add_vertex(vertex);
//! }
//! graph.add_edge("a", "b", 1.0)?;
//! graph.add_edge("b", "c", 2.0)?;
//! graph.add_edge("c", "a", 3.0)?;
//!
//! let forest = build_forest(&graph)?;
//! assert_eq!(forest.len(), 2);
//! assert_eq!(forest.total_weight(), 3.0);
//! # Ok::<(), spanforest_core::Error>(())
//! ```

pub mod error;
pub mod forest;
pub mod graph;

pub use error::{Error, Result};
pub use forest::{build_forest, ForestBuilder, ForestConfig, SpanningForest};
pub use graph::{Edge, EdgeListGraph, Traversal, TraversalGraph, VertexId};
