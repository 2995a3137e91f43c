// src/dag/mod.rs

//! Prerequisite DAG over quest ids.
//!
//! - [`graph`] holds the immutable [`PrerequisiteGraph`] plus the edge and
//!   cycle checks shared with config validation.

pub mod graph;

pub use graph::{PrerequisiteGraph, check_edges, topological_sort};
