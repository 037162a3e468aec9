//! Procedural partitioning of a pixel grid into labeled Voronoi-style regions
//! with adjacency-constrained coloring
//!
//! The pipeline places generator points, labels every pixel with its nearest
//! generator under a configurable distance metric, builds the region-adjacency
//! graph, and assigns region colors either at random or by solving a
//! graph-coloring integer program. Partitions can also be revealed
//! progressively for animated output.

#![forbid(unsafe_code)]

/// Region coloring: adjacency graph construction, palettes, and the chromatic
/// assignment solver
pub mod coloring;
/// Distance metrics and generator-point placement
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Distance-field labeling and progressive growth
pub mod partition;

pub use io::error::{GenerationError, Result};
