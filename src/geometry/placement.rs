//! Generator-point placement strategies
//!
//! Both strategies produce exactly the requested number of pairwise-distinct
//! integer coordinates inside the grid. Callers may instead supply explicit
//! normalized coordinates which are mapped onto the pixel grid.

use std::collections::HashSet;

use rand::{Rng, rngs::StdRng};

use crate::io::configuration::BEST_CANDIDATE_MULTIPLIER;
use crate::io::error::{GenerationError, Result, invalid_parameter};

/// Stable small-integer identity of a region
///
/// Assigned densely at generator creation and used to key the label grid,
/// the adjacency graph, and the color assignment.
pub type RegionId = u32;

/// A seed coordinate defining one region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorPoint {
    /// Region identity, dense over `0..count`
    pub id: RegionId,
    /// Pixel column in `[0, width)`
    pub x: u32,
    /// Pixel row in `[0, height)`
    pub y: u32,
}

impl GeneratorPoint {
    /// Create a generator point with an explicit region id
    pub const fn new(id: RegionId, x: u32, y: u32) -> Self {
        Self { id, x, y }
    }
}

/// How generator coordinates are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Uniformly random distinct coordinates, no spacing guarantee
    Randomized,
    /// Mitchell best-candidate sampling for blue-noise-like spacing
    Uniform,
}

/// Place `count` distinct generator points inside a `width` x `height` grid
///
/// # Errors
///
/// Returns [`GenerationError::Capacity`] when `count` exceeds the number of
/// pixel positions, and an invalid-parameter error for empty grids or a zero
/// region count.
pub fn place_points(
    width: u32,
    height: u32,
    count: usize,
    strategy: PlacementStrategy,
    rng: &mut StdRng,
) -> Result<Vec<GeneratorPoint>> {
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{width}x{height}"),
            &"grid dimensions must be positive",
        ));
    }
    if count == 0 {
        return Err(invalid_parameter(
            "regions",
            &count,
            &"at least one region is required",
        ));
    }
    if count as u64 > u64::from(width) * u64::from(height) {
        return Err(GenerationError::Capacity {
            regions: count,
            width,
            height,
        });
    }

    let coordinates = match strategy {
        PlacementStrategy::Randomized => randomized(width, height, count, rng),
        PlacementStrategy::Uniform => best_candidate(width, height, count, rng),
    };

    Ok(attach_ids(coordinates))
}

/// Map caller-supplied normalized coordinates onto the pixel grid
///
/// Coordinates live in `[0, 1] x [0, 1]` with the y axis pointing up; they
/// are flipped to match downward pixel rows and clamped into bounds.
///
/// # Errors
///
/// Returns an error for out-of-range coordinates or when two points map to
/// the same pixel.
pub fn map_normalized(points: &[(f64, f64)], width: u32, height: u32) -> Result<Vec<GeneratorPoint>> {
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{width}x{height}"),
            &"grid dimensions must be positive",
        ));
    }

    let mut seen = HashSet::with_capacity(points.len());
    let mut coordinates = Vec::with_capacity(points.len());

    for &(nx, ny) in points {
        if !(0.0..=1.0).contains(&nx) || !(0.0..=1.0).contains(&ny) {
            return Err(GenerationError::InvalidPoint {
                x: nx,
                y: ny,
                reason: "coordinates must lie in [0, 1]".to_string(),
            });
        }

        let x = ((nx * f64::from(width)) as u32).min(width - 1);
        let y = ((f64::from(height) - ny * f64::from(height)) as u32).min(height - 1);

        if !seen.insert((x, y)) {
            return Err(GenerationError::InvalidPoint {
                x: nx,
                y: ny,
                reason: format!("maps to pixel ({x}, {y}) already taken by another point"),
            });
        }

        coordinates.push((x, y));
    }

    Ok(attach_ids(coordinates))
}

fn attach_ids(coordinates: Vec<(u32, u32)>) -> Vec<GeneratorPoint> {
    coordinates
        .into_iter()
        .enumerate()
        .map(|(id, (x, y))| GeneratorPoint::new(id as RegionId, x, y))
        .collect()
}

fn randomized(width: u32, height: u32, count: usize, rng: &mut StdRng) -> Vec<(u32, u32)> {
    let mut seen = HashSet::with_capacity(count);
    let mut coordinates = Vec::with_capacity(count);

    while coordinates.len() < count {
        let p = (rng.random_range(0..width), rng.random_range(0..height));
        if seen.insert(p) {
            coordinates.push(p);
        }
    }

    coordinates
}

/// Mitchell best-candidate sampling
///
/// The `n`-th point draws `10n + 1` candidates and keeps the one whose
/// minimum Euclidean distance to the accepted set is largest. Iterations
/// that produce no valid candidate are retried.
fn best_candidate(width: u32, height: u32, count: usize, rng: &mut StdRng) -> Vec<(u32, u32)> {
    let mut accepted: Vec<(u32, u32)> = Vec::with_capacity(count);

    while accepted.len() < count {
        let candidates = BEST_CANDIDATE_MULTIPLIER * accepted.len() + 1;
        let mut best: Option<(u32, u32)> = None;
        let mut d_max = 0.0_f64;

        for _ in 0..candidates {
            let p = (rng.random_range(0..width), rng.random_range(0..height));

            if accepted.contains(&p) {
                continue;
            }

            if accepted.is_empty() {
                best = Some(p);
                break;
            }

            let d_min = accepted
                .iter()
                .map(|&(ax, ay)| {
                    let dx = f64::from(ax) - f64::from(p.0);
                    let dy = f64::from(ay) - f64::from(p.1);
                    dx.hypot(dy)
                })
                .fold(f64::INFINITY, f64::min);

            if d_min > d_max {
                d_max = d_min;
                best = Some(p);
            }
        }

        if let Some(p) = best {
            accepted.push(p);
        }
    }

    accepted
}
