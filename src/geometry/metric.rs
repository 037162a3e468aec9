//! Distance metrics and per-region metric assignment
//!
//! A metric is either evaluated exactly per pixel or, for the lattice metrics,
//! expanded ring by ring with a fixed neighbor-offset pattern. Only Manhattan
//! and Chebyshev have iso-distance shells that coincide with such rings; the
//! flood-fill shortcut is never offered for the other metrics.

use rand::{Rng, rngs::StdRng};

use crate::geometry::placement::RegionId;
use crate::io::error::{Result, invalid_parameter};

/// One ring of equal-cost expansion for the Manhattan metric
const MANHATTAN_RING: [(i32, i32); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

/// One ring of equal-cost expansion for the Chebyshev metric
const CHEBYSHEV_RING: [(i32, i32); 8] = [
    (0, 1),
    (1, 0),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Distance function between a pixel and a generator point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Straight-line distance
    Euclidean,
    /// `|dx| + |dy|`, diamond-shaped cells
    Manhattan,
    /// `max(|dx|, |dy|)`, square-shaped cells
    Chebyshev,
    /// Euclidean restricted to 45-degree principal directions,
    /// octagonal cells
    Euclidean45,
}

impl Metric {
    /// Evaluate the distance from pixel `(x, y)` to generator `(gx, gy)`
    pub fn evaluate(self, x: i64, y: i64, gx: i64, gy: i64) -> f64 {
        let dx = (gx - x).abs() as f64;
        let dy = (gy - y).abs() as f64;

        match self {
            Self::Euclidean => dx.hypot(dy),
            Self::Manhattan => dx + dy,
            Self::Chebyshev => dx.max(dy),
            Self::Euclidean45 => std::f64::consts::SQRT_2.mul_add(dx.min(dy), (dx - dy).abs()),
        }
    }

    /// Neighbor offsets spanning one ring of equal-cost expansion
    ///
    /// Returns `None` for metrics whose iso-distance shells are not lattice
    /// rings; those must always be evaluated exactly.
    pub const fn ring_offsets(self) -> Option<&'static [(i32, i32)]> {
        match self {
            Self::Manhattan => Some(&MANHATTAN_RING),
            Self::Chebyshev => Some(&CHEBYSHEV_RING),
            Self::Euclidean | Self::Euclidean45 => None,
        }
    }

    /// Whether the flood-fill labeling strategy is valid for this metric
    pub const fn is_lattice(self) -> bool {
        self.ring_offsets().is_some()
    }
}

/// One metric per region, fixed for the whole computation
///
/// In mixed mode each region draws its metric once, before any pixel is
/// evaluated, and keeps it across every labeling pass and animation frame so
/// growth stays geometrically consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMetrics {
    metrics: Vec<Metric>,
}

impl RegionMetrics {
    /// Assign the same metric to every region without consuming randomness
    pub fn uniform(metric: Metric, regions: usize) -> Self {
        Self {
            metrics: vec![metric; regions],
        }
    }

    /// Draw one metric per region uniformly from `choices`
    ///
    /// A single-element choice set degenerates to [`Self::uniform`] and
    /// consumes no randomness.
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error for an empty choice set; there is
    /// no implicit default metric.
    pub fn mixed(choices: &[Metric], regions: usize, rng: &mut StdRng) -> Result<Self> {
        match choices {
            [] => Err(invalid_parameter(
                "distance_algorithm",
                &"[]",
                &"at least one distance metric is required",
            )),
            [only] => Ok(Self::uniform(*only, regions)),
            _ => {
                let metrics = (0..regions)
                    .map(|_| {
                        let index = rng.random_range(0..choices.len());
                        choices.get(index).copied().unwrap_or(Metric::Euclidean)
                    })
                    .collect();
                Ok(Self { metrics })
            }
        }
    }

    /// The metric bound to `region`
    ///
    /// Region ids beyond the table are a caller bug; labeling entry points
    /// check coverage in debug builds.
    pub fn get(&self, region: RegionId) -> Metric {
        self.metrics
            .get(region as usize)
            .copied()
            .unwrap_or(Metric::Euclidean)
    }

    /// Number of regions covered by this assignment
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether no regions are covered
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// The single lattice metric shared by every region, if there is one
    ///
    /// This is the precondition for the flood-fill shortcut: all regions must
    /// expand with the same ring pattern.
    pub fn shared_lattice(&self) -> Option<Metric> {
        let first = self.metrics.first().copied()?;
        (first.is_lattice() && self.metrics.iter().all(|m| *m == first)).then_some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::error::GenerationError;
    use rand::SeedableRng;

    #[test]
    fn test_mixed_rejects_an_empty_choice_set() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            RegionMetrics::mixed(&[], 4, &mut rng),
            Err(GenerationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_lattice_guard() {
        assert!(Metric::Manhattan.is_lattice());
        assert!(Metric::Chebyshev.is_lattice());
        assert!(!Metric::Euclidean.is_lattice());
        assert!(!Metric::Euclidean45.is_lattice());
    }

    #[test]
    fn test_metric_values() {
        assert!((Metric::Euclidean.evaluate(0, 0, 3, 4) - 5.0).abs() < f64::EPSILON);
        assert!((Metric::Manhattan.evaluate(1, 1, 4, 5) - 7.0).abs() < f64::EPSILON);
        assert!((Metric::Chebyshev.evaluate(0, 0, 3, 7) - 7.0).abs() < f64::EPSILON);

        // 45-degree metric walks the diagonal then the remainder
        let expected = std::f64::consts::SQRT_2 * 2.0 + 3.0;
        assert!((Metric::Euclidean45.evaluate(0, 0, 2, 5) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_shared_lattice_rejects_mixed_rings() {
        let same = RegionMetrics::uniform(Metric::Manhattan, 4);
        assert_eq!(same.shared_lattice(), Some(Metric::Manhattan));

        let euclidean = RegionMetrics::uniform(Metric::Euclidean, 4);
        assert_eq!(euclidean.shared_lattice(), None);
    }
}
