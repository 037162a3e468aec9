//! Geometric primitives for the partition engine
//!
//! This module contains the pieces that determine region shape and location:
//! - Distance metrics and their lattice expansion patterns
//! - Generator-point placement strategies

/// Distance metrics and per-region metric assignment
pub mod metric;
/// Generator-point placement strategies
pub mod placement;

pub use metric::{Metric, RegionMetrics};
pub use placement::{GeneratorPoint, PlacementStrategy, RegionId};
