//! Progressive growth frame sequence for animated output
//!
//! Re-runs the labeler with an increasing distance cap, yielding one partial
//! grid per step until the partial grid matches the unbounded labeling. The
//! cap sequence is strictly increasing and the unbounded grid has a finite
//! maximum metric value, so the sequence always terminates.

use crate::geometry::metric::RegionMetrics;
use crate::geometry::placement::GeneratorPoint;
use crate::partition::labeler::{LabelGrid, label_grid};

/// Lazy, finite, non-restartable sequence of partial label grids
///
/// The final yielded frame equals the unbounded labeling pixel-for-pixel.
#[derive(Debug)]
pub struct GrowthFrames<'a> {
    width: u32,
    height: u32,
    generators: &'a [GeneratorPoint],
    metrics: &'a RegionMetrics,
    target: LabelGrid,
    next_cap: u64,
    done: bool,
}

/// Build the growth sequence for the given partition inputs
///
/// The unbounded grid is computed once up front; it is available through
/// [`GrowthFrames::target`] for color solving before iteration starts.
pub fn growth_frames<'a>(
    width: u32,
    height: u32,
    generators: &'a [GeneratorPoint],
    metrics: &'a RegionMetrics,
) -> GrowthFrames<'a> {
    let target = label_grid(width, height, generators, metrics, None);

    GrowthFrames {
        width,
        height,
        generators,
        metrics,
        target,
        next_cap: 1,
        done: false,
    }
}

impl GrowthFrames<'_> {
    /// The unbounded labeling the sequence converges to
    pub const fn target(&self) -> &LabelGrid {
        &self.target
    }
}

impl Iterator for GrowthFrames<'_> {
    type Item = LabelGrid;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let frame = label_grid(
            self.width,
            self.height,
            self.generators,
            self.metrics,
            Some(self.next_cap as f64),
        );
        self.next_cap += 1;

        if frame == self.target {
            self.done = true;
        }

        Some(frame)
    }
}
