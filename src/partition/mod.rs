//! Distance-field labeling of the pixel grid
//!
//! This module contains the partition engine:
//! - The label grid and the exact per-pixel labeling strategy
//! - The multi-source flood-fill shortcut for lattice metrics
//! - The progressive growth driver for animated output

/// Multi-source flood-fill labeling for lattice metrics
pub(crate) mod flood;
/// Progressive growth frame sequence
pub mod growth;
/// Label grid and exact distance-field labeling
pub mod labeler;

pub use growth::{GrowthFrames, growth_frames};
pub use labeler::{LabelGrid, label_grid, label_grid_exact};
