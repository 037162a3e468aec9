//! Smoke tests for PNG and GIF export of generated partitions

use rand::{SeedableRng, rngs::StdRng};
use voronoize::coloring::palette::{Color, ColorAssignment, random_assignment};
use voronoize::geometry::metric::{Metric, RegionMetrics};
use voronoize::geometry::placement::{PlacementStrategy, place_points};
use voronoize::io::animation::export_growth_gif;
use voronoize::io::image::{BorderStyle, export_png};
use voronoize::io::progress::PipelineProgress;
use voronoize::partition::growth::growth_frames;
use voronoize::partition::labeler::label_grid;

const PALETTE: [Color; 3] = [[200, 30, 30], [30, 200, 30], [30, 30, 200]];

#[test]
fn test_png_export_writes_a_file() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temp directory must be creatable");
    };
    let path = dir.path().join("mosaic.png");

    let mut rng = StdRng::seed_from_u64(1);
    let generators = place_points(24, 16, 4, PlacementStrategy::Uniform, &mut rng)
        .unwrap_or_else(|_| Vec::new());
    let metrics = RegionMetrics::uniform(Metric::Euclidean, generators.len());
    let grid = label_grid(24, 16, &generators, &metrics, None);
    let assignment = random_assignment(&generators, &PALETTE, &mut rng)
        .unwrap_or_else(|_| ColorAssignment::new());

    let border = Some(BorderStyle {
        color: [255, 255, 255],
        size: 2,
    });
    let result = export_png(
        &grid,
        &assignment,
        [255, 255, 255],
        border,
        &path.to_string_lossy(),
    );

    assert!(result.is_ok());
    assert!(
        std::fs::metadata(&path).is_ok_and(|meta| meta.len() > 0),
        "exported PNG must be non-empty"
    );
}

#[test]
fn test_growth_gif_export_writes_all_frames() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temp directory must be creatable");
    };
    let path = dir.path().join("growth.gif");

    let mut rng = StdRng::seed_from_u64(2);
    let generators = place_points(20, 14, 3, PlacementStrategy::Uniform, &mut rng)
        .unwrap_or_else(|_| Vec::new());
    let metrics = RegionMetrics::uniform(Metric::Manhattan, generators.len());

    let frames = growth_frames(20, 14, &generators, &metrics);
    let target = frames.target().clone();
    let assignment = random_assignment(&generators, &PALETTE, &mut rng)
        .unwrap_or_else(|_| ColorAssignment::new());

    let progress = PipelineProgress::new(false);
    let frame_count = export_growth_gif(
        frames,
        &assignment,
        [255, 255, 255],
        None,
        &path.to_string_lossy(),
        10,
        &progress,
    )
    .unwrap_or(0);

    assert!(frame_count > 0, "the growth sequence must yield frames");
    assert!(target.is_complete());
    assert!(
        std::fs::metadata(&path).is_ok_and(|meta| meta.len() > 0),
        "exported GIF must be non-empty"
    );
}
