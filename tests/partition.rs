//! Validates generator placement, distance-field labeling, and the
//! progressive growth sequence

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};
use voronoize::GenerationError;
use voronoize::geometry::metric::{Metric, RegionMetrics};
use voronoize::geometry::placement::{
    GeneratorPoint, PlacementStrategy, map_normalized, place_points,
};
use voronoize::partition::growth::growth_frames;
use voronoize::partition::labeler::{label_grid, label_grid_exact};

#[test]
fn test_placement_produces_distinct_in_bounds_points() {
    for strategy in [PlacementStrategy::Randomized, PlacementStrategy::Uniform] {
        let mut rng = StdRng::seed_from_u64(7);
        let points = place_points(64, 48, 40, strategy, &mut rng)
            .unwrap_or_else(|_| Vec::new());

        assert_eq!(points.len(), 40);

        let distinct: HashSet<(u32, u32)> = points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(distinct.len(), 40, "coordinates must be pairwise distinct");

        for (expected_id, point) in points.iter().enumerate() {
            assert_eq!(point.id, expected_id as u32, "ids must be dense");
            assert!(point.x < 64 && point.y < 48, "points must be in bounds");
        }
    }
}

#[test]
fn test_placement_fails_when_regions_exceed_pixels() {
    let mut rng = StdRng::seed_from_u64(7);
    let result = place_points(5, 5, 26, PlacementStrategy::Randomized, &mut rng);

    assert!(matches!(result, Err(GenerationError::Capacity { .. })));
}

#[test]
fn test_placement_can_fill_the_whole_grid() {
    let mut rng = StdRng::seed_from_u64(11);
    let points = place_points(4, 4, 16, PlacementStrategy::Randomized, &mut rng)
        .unwrap_or_else(|_| Vec::new());

    let distinct: HashSet<(u32, u32)> = points.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(distinct.len(), 16);
}

#[test]
fn test_normalized_points_flip_the_y_axis() {
    let points = map_normalized(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.5)], 10, 10)
        .unwrap_or_else(|_| Vec::new());

    assert_eq!(points.len(), 3);
    // y = 0 is the bottom of the normalized space, so it maps to the last row
    assert!(matches!(points.first(), Some(p) if p.x == 0 && p.y == 9));
    assert!(matches!(points.get(1), Some(p) if p.x == 0 && p.y == 0));
    assert!(matches!(points.get(2), Some(p) if p.x == 9 && p.y == 5));
}

#[test]
fn test_normalized_points_reject_duplicates_and_out_of_range() {
    let duplicate = map_normalized(&[(0.2, 0.2), (0.2, 0.2)], 100, 100);
    assert!(matches!(duplicate, Err(GenerationError::InvalidPoint { .. })));

    let outside = map_normalized(&[(1.5, 0.5)], 100, 100);
    assert!(matches!(outside, Err(GenerationError::InvalidPoint { .. })));
}

// Two Chebyshev generators at opposite corners split the grid exactly where
// the max-coordinate distances to both are equal
#[test]
fn test_chebyshev_diagonal_boundary_falls_on_equal_distance() {
    let generators = [GeneratorPoint::new(0, 0, 0), GeneratorPoint::new(1, 9, 9)];
    let metrics = RegionMetrics::uniform(Metric::Chebyshev, 2);
    let grid = label_grid(10, 10, &generators, &metrics, None);

    for y in 0..10_u32 {
        for x in 0..10_u32 {
            let d_first = x.max(y);
            let d_second = (9 - x).max(9 - y);
            // Ties go to the first generator
            let expected = if d_first <= d_second { 0 } else { 1 };
            assert_eq!(
                grid.label(x, y),
                Some(expected),
                "pixel ({x}, {y}) on the wrong side of the diagonal"
            );
        }
    }
}

#[test]
fn test_tie_breaks_resolve_to_the_lowest_id_for_unsorted_generators() {
    // The slice is deliberately not sorted by id; the equidistant column must
    // go to the lower id under both labeling strategies
    let generators = [GeneratorPoint::new(5, 0, 0), GeneratorPoint::new(1, 4, 0)];
    let metrics = RegionMetrics::uniform(Metric::Manhattan, 6);

    let flooded = label_grid(5, 1, &generators, &metrics, None);
    let exact = label_grid_exact(5, 1, &generators, &metrics, None);

    assert_eq!(flooded.label(2, 0), Some(1), "tie must go to the lowest id");
    assert_eq!(exact, flooded, "labeling strategies disagree on a tie");
}

#[test]
fn test_duplicate_seed_coordinates_resolve_to_the_lowest_id() {
    // Pre-supplied generators may share a coordinate; every pixel is then
    // equidistant to both regions and the lower id owns the whole grid
    let generators = [GeneratorPoint::new(3, 2, 2), GeneratorPoint::new(0, 2, 2)];
    let metrics = RegionMetrics::uniform(Metric::Chebyshev, 4);

    let flooded = label_grid(5, 5, &generators, &metrics, None);
    let exact = label_grid_exact(5, 5, &generators, &metrics, None);

    assert_eq!(flooded, exact);
    for (_, _, label) in flooded.pixels() {
        assert_eq!(label, Some(0));
    }
}

#[test]
fn test_flood_fill_matches_exact_evaluation_for_lattice_metrics() {
    let mut configuration = 0;

    for seed in 0..25_u64 {
        for metric in [Metric::Manhattan, Metric::Chebyshev] {
            let mut rng = StdRng::seed_from_u64(seed);
            let width = rng.random_range(2..=200);
            let height = rng.random_range(2..=200);
            let count = rng.random_range(1..=16).min((width * height) as usize);

            let generators =
                place_points(width, height, count, PlacementStrategy::Randomized, &mut rng)
                    .unwrap_or_else(|_| Vec::new());
            let metrics = RegionMetrics::uniform(metric, generators.len());

            // label_grid takes the flood path for a shared lattice metric
            let flooded = label_grid(width, height, &generators, &metrics, None);
            let exact = label_grid_exact(width, height, &generators, &metrics, None);
            assert_eq!(flooded, exact, "unbounded mismatch for {metric:?} seed {seed}");

            let flooded_capped = label_grid(width, height, &generators, &metrics, Some(9.0));
            let exact_capped =
                label_grid_exact(width, height, &generators, &metrics, Some(9.0));
            assert_eq!(
                flooded_capped, exact_capped,
                "capped mismatch for {metric:?} seed {seed}"
            );

            configuration += 1;
        }
    }

    assert_eq!(configuration, 50);
}

#[test]
fn test_assigned_labels_are_stable_under_growing_caps() {
    let mut rng = StdRng::seed_from_u64(3);
    let generators = place_points(60, 40, 6, PlacementStrategy::Uniform, &mut rng)
        .unwrap_or_else(|_| Vec::new());
    let metrics = RegionMetrics::uniform(Metric::Euclidean, generators.len());

    let unbounded = label_grid(60, 40, &generators, &metrics, None);
    assert!(unbounded.is_complete());

    let mut previous_assigned = 0;
    for cap in [2.0, 5.0, 9.5, 20.0, 80.0] {
        let capped = label_grid(60, 40, &generators, &metrics, Some(cap));

        for (x, y, label) in capped.pixels() {
            let d_min = generators
                .iter()
                .map(|g| {
                    Metric::Euclidean.evaluate(
                        i64::from(x),
                        i64::from(y),
                        i64::from(g.x),
                        i64::from(g.y),
                    )
                })
                .fold(f64::INFINITY, f64::min);

            if d_min <= cap {
                // Once reachable, the label matches the unbounded partition
                assert_eq!(label, unbounded.label(x, y));
            } else {
                assert_eq!(label, None, "pixel beyond the cap must stay unassigned");
            }
        }

        let assigned = capped.assigned_count();
        assert!(assigned >= previous_assigned, "reveal must be monotonic");
        previous_assigned = assigned;
    }
}

#[test]
fn test_growth_terminates_at_the_unbounded_labeling() {
    let generators = [
        GeneratorPoint::new(0, 2, 2),
        GeneratorPoint::new(1, 9, 3),
        GeneratorPoint::new(2, 5, 10),
    ];
    let metrics = RegionMetrics::uniform(Metric::Manhattan, 3);

    let frames = growth_frames(12, 12, &generators, &metrics);
    let target = frames.target().clone();
    let collected: Vec<_> = frames.collect();

    assert!(matches!(collected.last(), Some(last) if *last == target));

    // The frame count equals the largest minimum distance in the grid
    let mut max_distance = 0_u64;
    for y in 0..12_i64 {
        for x in 0..12_i64 {
            let d_min = generators
                .iter()
                .map(|g| {
                    Metric::Manhattan.evaluate(x, y, i64::from(g.x), i64::from(g.y)) as u64
                })
                .min()
                .unwrap_or(0);
            max_distance = max_distance.max(d_min);
        }
    }
    assert_eq!(collected.len() as u64, max_distance);

    // Every frame only reveals pixels of the final partition
    for frame in &collected {
        for (x, y, label) in frame.pixels() {
            if label.is_some() {
                assert_eq!(label, target.label(x, y));
            }
        }
    }
}

#[test]
fn test_mixed_metrics_stay_fixed_per_region_across_frames() {
    let mut rng = StdRng::seed_from_u64(21);
    let generators = place_points(32, 24, 5, PlacementStrategy::Uniform, &mut rng)
        .unwrap_or_else(|_| Vec::new());
    let Ok(metrics) = RegionMetrics::mixed(
        &[Metric::Euclidean, Metric::Manhattan, Metric::Chebyshev],
        generators.len(),
        &mut rng,
    ) else {
        unreachable!("a non-empty choice set must produce a metrics table")
    };

    let frames = growth_frames(32, 24, &generators, &metrics);
    let target = frames.target().clone();

    // If a region's metric drifted between frames, early frames would reveal
    // pixels that disagree with the final partition
    for frame in frames {
        for (x, y, label) in frame.pixels() {
            if label.is_some() {
                assert_eq!(label, target.label(x, y));
            }
        }
    }
}
