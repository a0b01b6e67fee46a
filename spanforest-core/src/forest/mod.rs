//! Spanning Forests
//!
//! This module builds minimum spanning forests from an [`EdgeListGraph`].
//!
//! # Overview
//!
//! The builder follows Kruskal's algorithm: edges are taken lightest first
//! and kept unless they would close a cycle. Instead of a union-find
//! structure, cycles are detected by walking a working graph of the edges
//! accepted so far.
//!
//! Most edges never need that walk. An edge with an endpoint that no accepted
//! edge has touched cannot close a cycle, so only edges between two touched
//! vertices pay for a reachability check.
//!
//! [`EdgeListGraph`]: crate::graph::EdgeListGraph

mod builder;
mod config;

pub use builder::{build_forest, ForestBuilder, SpanningForest};
pub use config::ForestConfig;
