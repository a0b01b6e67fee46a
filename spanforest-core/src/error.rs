//! Error Types
//!
//! Failures raised while building graphs or spanning forests.
//!
//! Two kinds of problems are distinguished:
//!
//! - Input problems (`UnknownVertex`, `InvalidWeight`) are reported by the
//!   graph-construction calls, before any forest is built.
//! - `RemovalInconsistency` means the builder's own bookkeeping disagrees with
//!   its working copy of the graph. It aborts the run.
//!
//! A disconnected input is not an error. The builder returns the partial
//! forest and reports it through [`SpanningForest::is_spanning`].
//!
//! [`SpanningForest::is_spanning`]: crate::forest::SpanningForest::is_spanning

use thiserror::Error;

use crate::graph::VertexId;

/// Errors produced by graph construction and forest building.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An edge names a source vertex that was never registered.
    #[error("unknown vertex: {0}")]
    UnknownVertex(VertexId),

    /// An edge weight is NaN or infinite.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    /// The working graph has no edge to consume for an accepted edge.
    #[error("no edge {from} -> {to} left under vertex {vertex}")]
    RemovalInconsistency {
        vertex: VertexId,
        from: VertexId,
        to: VertexId,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
