//! Region coloring
//!
//! This module turns a labeled grid into a region-adjacency graph and assigns
//! one color per region, either unconstrained at random or by solving a
//! graph-coloring integer program over the adjacency edges.

/// Region-adjacency graph construction
pub mod adjacency;
/// Color types, hex parsing, and unconstrained assignment
pub mod palette;
/// Chromatic assignment via integer programming
pub mod solver;

pub use adjacency::{AdjacencyGraph, build_adjacency};
pub use palette::{Color, ColorAssignment};
pub use solver::{ColorMode, solve_coloring};
