//! Region-adjacency graph construction
//!
//! Scans the labeled grid for 4-connected pixel pairs with different labels
//! and collapses them into a deduplicated edge set over a dense region-id
//! range suitable for the solver. Checking only the forward neighbors (right
//! and down) of each pixel covers the symmetric relation without double
//! counting.

use std::collections::{BTreeMap, BTreeSet};

use crate::geometry::placement::RegionId;
use crate::partition::labeler::LabelGrid;

/// Regions and their pixel adjacencies, remapped to a dense `0..n` range
///
/// Every region that appears anywhere in the grid receives a dense id, even
/// when it has no edges; isolated regions still need a color.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    regions: Vec<RegionId>,
    dense_of: BTreeMap<RegionId, u32>,
    edges: Vec<(u32, u32)>,
}

impl AdjacencyGraph {
    /// Build a graph from region ids and dense edge pairs
    ///
    /// Edges are normalized to `(lo, hi)` and deduplicated; self-loops and
    /// pairs referencing unknown dense ids are dropped.
    pub fn new(regions: Vec<RegionId>, edges: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let count = regions.len() as u32;
        let dense_of = regions
            .iter()
            .enumerate()
            .map(|(dense, &region)| (region, dense as u32))
            .collect();

        let normalized: BTreeSet<(u32, u32)> = edges
            .into_iter()
            .filter(|&(u, v)| u != v && u < count && v < count)
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect();

        Self {
            regions,
            dense_of,
            edges: normalized.into_iter().collect(),
        }
    }

    /// Number of distinct regions observed in the grid
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Deduplicated `(lo, hi)` edge pairs over dense ids
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Dense id of a region, if it appears in the grid
    pub fn dense_id(&self, region: RegionId) -> Option<u32> {
        self.dense_of.get(&region).copied()
    }

    /// Region id behind a dense id
    pub fn region_id(&self, dense: u32) -> Option<RegionId> {
        self.regions.get(dense as usize).copied()
    }

    /// All observed region ids in dense order
    pub fn regions(&self) -> &[RegionId] {
        &self.regions
    }
}

/// Scan the grid and collapse pixel adjacencies into region edges
///
/// Unassigned pixels contribute no edges. Self-adjacency is impossible by
/// construction since only differing labels are recorded.
pub fn build_adjacency(grid: &LabelGrid) -> AdjacencyGraph {
    let mut observed = BTreeSet::new();
    for (_, _, label) in grid.pixels() {
        if let Some(region) = label {
            observed.insert(region);
        }
    }
    let regions: Vec<RegionId> = observed.into_iter().collect();
    let dense_of: BTreeMap<RegionId, u32> = regions
        .iter()
        .enumerate()
        .map(|(dense, &region)| (region, dense as u32))
        .collect();

    let mut edges = BTreeSet::new();
    for (x, y, label) in grid.pixels() {
        let Some(here) = label else { continue };

        for (nx, ny) in [(x + 1, y), (x, y + 1)] {
            let Some(there) = grid.label(nx, ny) else {
                continue;
            };
            if here == there {
                continue;
            }

            if let (Some(&a), Some(&b)) = (dense_of.get(&here), dense_of.get(&there)) {
                edges.insert((a.min(b), a.max(b)));
            }
        }
    }

    AdjacencyGraph::new(regions, edges)
}
