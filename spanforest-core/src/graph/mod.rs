//! Graph Representations
//!
//! This module holds the two graph structures the forest builder works with.
//!
//! # Overview
//!
//! - [`EdgeListGraph`] is the input. Callers declare vertices, then add
//!   weighted directed edges from them. It is never modified by a forest run.
//! - [`TraversalGraph`] is a working copy owned by one forest run. Edges can be
//!   removed from it in place, and [`reachable`] walks whatever is left.
//!
//! Edges are stored directionally. For cycle purposes the builder treats
//! them as plain connections between their two endpoints.

mod edge;
mod edge_list;
mod traversal;

pub use edge::{Edge, VertexId};
pub use edge_list::EdgeListGraph;
pub use traversal::{reachable, reachable_with, Traversal, TraversalGraph};
