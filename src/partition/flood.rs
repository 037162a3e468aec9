//! Multi-source flood-fill labeling for lattice metrics
//!
//! Seeds a frontier with all generators at once and expands ring by ring
//! using the metric's fixed neighbor-offset pattern. Ring `r` reaches exactly
//! the unassigned pixels at metric distance `r` from their nearest generator,
//! so the first ring touching a pixel determines its label. Same-ring ties
//! commit to the lowest region id, matching the tie-break of exact
//! evaluation.

use std::collections::BTreeMap;

use crate::geometry::metric::Metric;
use crate::geometry::placement::{GeneratorPoint, RegionId};
use crate::partition::labeler::LabelGrid;

/// Label the grid by simultaneous ring expansion from every generator
///
/// `d_limit` caps the number of rings; unreached pixels stay unassigned.
/// Only valid for metrics with a ring offset pattern; callers guard on
/// [`Metric::ring_offsets`] via `RegionMetrics::shared_lattice`.
pub(crate) fn flood_label(
    width: u32,
    height: u32,
    generators: &[GeneratorPoint],
    metric: Metric,
    d_limit: Option<f64>,
) -> LabelGrid {
    let mut grid = LabelGrid::unassigned(width, height);

    let Some(offsets) = metric.ring_offsets() else {
        return grid;
    };

    // Ring r is assignable while r <= d_limit; distances are whole numbers
    let max_rings = d_limit.map(|limit| {
        if limit < 0.0 { 0 } else { limit.floor() as u64 }
    });

    // Duplicate seed coordinates resolve to the lowest id, independent of
    // generator slice order
    let mut seeds: BTreeMap<(u32, u32), RegionId> = BTreeMap::new();
    for generator in generators {
        if generator.x < width && generator.y < height {
            seeds
                .entry((generator.x, generator.y))
                .and_modify(|current| {
                    if generator.id < *current {
                        *current = generator.id;
                    }
                })
                .or_insert(generator.id);
        }
    }

    let mut frontier: Vec<(u32, u32, RegionId)> = Vec::with_capacity(seeds.len());
    for (&(x, y), &region) in &seeds {
        grid.set(x, y, region);
        frontier.push((x, y, region));
    }

    let mut ring = 0_u64;
    while !frontier.is_empty() {
        ring += 1;
        if max_rings.is_some_and(|limit| ring > limit) {
            break;
        }

        // Collect this ring's claims before committing any of them, so a
        // pixel reachable from several regions in the same ring always goes
        // to the lowest id regardless of frontier order
        let mut claims: BTreeMap<(u32, u32), RegionId> = BTreeMap::new();

        for &(x, y, region) in &frontier {
            for &(dx, dy) in offsets {
                let nx = i64::from(x) + i64::from(dx);
                let ny = i64::from(y) + i64::from(dy);

                if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                    continue;
                }

                let (nx, ny) = (nx as u32, ny as u32);
                if grid.label(nx, ny).is_some() {
                    continue;
                }

                claims
                    .entry((nx, ny))
                    .and_modify(|current| {
                        if region < *current {
                            *current = region;
                        }
                    })
                    .or_insert(region);
            }
        }

        let mut next = Vec::with_capacity(claims.len());
        for ((x, y), region) in claims {
            grid.set(x, y, region);
            next.push((x, y, region));
        }
        frontier = next;
    }

    grid
}
