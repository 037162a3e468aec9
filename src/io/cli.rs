//! Command-line interface and pipeline orchestration
//!
//! Parses the configuration surface, then drives placement, labeling,
//! adjacency analysis, color solving, and export. Everything here is
//! pass-through configuration; the algorithmic state lives in the core
//! modules.

use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;

use crate::coloring::adjacency::build_adjacency;
use crate::coloring::palette::{Color, parse_hex, random_assignment};
use crate::coloring::solver::{ColorMode, solve_coloring};
use crate::geometry::metric::{Metric, RegionMetrics};
use crate::geometry::placement::{
    GeneratorPoint, PlacementStrategy, map_normalized, place_points,
};
use crate::io::animation::export_growth_gif;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_BORDER_COLOR, DEFAULT_HEIGHT, DEFAULT_REGIONS, DEFAULT_WIDTH,
    GIF_FRAME_DELAY_MS, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{BorderStyle, export_png};
use crate::io::progress::PipelineProgress;
use crate::partition::growth::growth_frames;
use crate::partition::labeler::label_grid;

/// Generator placement strategy option
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegionArg {
    /// Entirely random distinct coordinates
    Randomized,
    /// Best-candidate sampling for more even spacing
    Uniform,
}

impl RegionArg {
    const fn strategy(self) -> PlacementStrategy {
        match self {
            Self::Randomized => PlacementStrategy::Randomized,
            Self::Uniform => PlacementStrategy::Uniform,
        }
    }
}

/// Distance metric option; pass several for mixed mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistanceArg {
    /// Straight-line distance
    Euclidean,
    /// Taxicab distance, diamond cells
    Manhattan,
    /// Chessboard distance, square cells
    Chebyshev,
    /// Euclidean restricted to 45-degree directions, octagonal cells
    Euclidean45,
}

impl DistanceArg {
    const fn metric(self) -> Metric {
        match self {
            Self::Euclidean => Metric::Euclidean,
            Self::Manhattan => Metric::Manhattan,
            Self::Chebyshev => Metric::Chebyshev,
            Self::Euclidean45 => Metric::Euclidean45,
        }
    }
}

/// Color assignment option
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    /// Independent uniform palette draw per region, adjacency ignored
    Random,
    /// Adjacent regions never share a color, whole palette used
    NoAdjacentSame,
    /// Adjacent regions never share a color, color count minimized
    MinimumCount,
}

#[derive(Parser)]
#[command(name = "voronoize")]
#[command(
    author,
    version,
    about = "Generate Voronoi mosaic images with adjacency-aware coloring"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Output path (PNG, or animated GIF with --animate)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Number of regions to generate
    #[arg(short, long, default_value_t = DEFAULT_REGIONS)]
    pub regions: usize,

    /// Explicit normalized generator coordinate "x,y" in [0,1], repeatable;
    /// overrides --regions and --region-algorithm
    #[arg(short, long, value_name = "X,Y")]
    pub point: Vec<String>,

    /// Palette colors as hex strings
    #[arg(short, long, value_name = "HEX", num_args = 1.., required = true)]
    pub colors: Vec<String>,

    /// Generator placement strategy
    #[arg(long, value_enum, default_value = "uniform")]
    pub region_algorithm: RegionArg,

    /// Distance metric(s); passing several draws one per region at random
    #[arg(long, value_enum, num_args = 1.., default_value = "euclidean")]
    pub distance_algorithm: Vec<DistanceArg>,

    /// Color assignment mode
    #[arg(long, value_enum, default_value = "random")]
    pub color_algorithm: ColorArg,

    /// Random seed for reproducible generation; drawn and reported if absent
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Border stroke thickness in pixels (0 disables borders)
    #[arg(long, default_value_t = 0)]
    pub border_size: u32,

    /// Border stroke color as a hex string
    #[arg(long, default_value = DEFAULT_BORDER_COLOR)]
    pub border_color: String,

    /// Render the growth of the partition as an animated GIF
    #[arg(short, long)]
    pub animate: bool,

    /// Background color for pixels not yet reached during growth
    #[arg(long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Suppress progress output; the seed line is still printed
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one generation run from parsed arguments
pub struct Pipeline {
    cli: Cli,
    progress: PipelineProgress,
}

impl Pipeline {
    /// Create a pipeline from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = PipelineProgress::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Run placement, labeling, coloring, and export
    ///
    /// # Errors
    ///
    /// Returns the first fatal error encountered; nothing is written to disk
    /// in that case.
    pub fn run(&self) -> Result<()> {
        self.validate_dimensions()?;

        let palette = self
            .cli
            .colors
            .iter()
            .map(|c| parse_hex(c))
            .collect::<Result<Vec<Color>>>()?;
        let background = parse_hex(&self.cli.background)?;
        let border = (self.cli.border_size > 0)
            .then(|| {
                parse_hex(&self.cli.border_color).map(|color| BorderStyle {
                    color,
                    size: self.cli.border_size,
                })
            })
            .transpose()?;

        let seed = self.cli.seed.unwrap_or_else(|| rand::rng().random());
        self.progress.report_seed(seed);
        let mut rng = StdRng::seed_from_u64(seed);

        self.progress.stage("Placing generator points");
        let generators = self.generators(&mut rng)?;

        let choices: Vec<Metric> = self
            .cli
            .distance_algorithm
            .iter()
            .map(|d| d.metric())
            .collect();
        let metrics = RegionMetrics::mixed(&choices, generators.len(), &mut rng)?;

        let output = self
            .cli
            .output
            .to_str()
            .map(str::to_owned)
            .ok_or_else(|| {
                invalid_parameter(
                    "output",
                    &self.cli.output.display(),
                    &"path is not valid UTF-8",
                )
            })?;

        if self.cli.animate {
            self.progress.stage("Computing region growth");
            let frames = growth_frames(self.cli.width, self.cli.height, &generators, &metrics);

            self.progress.stage("Assigning region colors");
            let assignment =
                self.assign_colors(frames.target(), &generators, &palette, &mut rng)?;

            self.progress.start_frames("Encoding animation");
            let frame_count = export_growth_gif(
                frames,
                &assignment,
                background,
                border,
                &output,
                GIF_FRAME_DELAY_MS,
                &self.progress,
            )?;

            self.progress
                .finish(&format!("Animation saved to {output} ({frame_count} frames)"));
        } else {
            self.progress.stage("Calculating region areas");
            let grid = label_grid(self.cli.width, self.cli.height, &generators, &metrics, None);

            self.progress.stage("Assigning region colors");
            let assignment = self.assign_colors(&grid, &generators, &palette, &mut rng)?;

            self.progress.stage("Rendering image");
            export_png(&grid, &assignment, background, border, &output)?;

            self.progress.finish(&format!("Image saved to {output}"));
        }

        Ok(())
    }

    fn validate_dimensions(&self) -> Result<()> {
        for (name, value) in [("width", self.cli.width), ("height", self.cli.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }

    fn generators(&self, rng: &mut StdRng) -> Result<Vec<GeneratorPoint>> {
        if self.cli.point.is_empty() {
            return place_points(
                self.cli.width,
                self.cli.height,
                self.cli.regions,
                self.cli.region_algorithm.strategy(),
                rng,
            );
        }

        self.progress.note("Region centers provided, skipping generation");
        let normalized = self
            .cli
            .point
            .iter()
            .map(|raw| parse_point(raw))
            .collect::<Result<Vec<(f64, f64)>>>()?;
        map_normalized(&normalized, self.cli.width, self.cli.height)
    }

    fn assign_colors(
        &self,
        grid: &crate::partition::labeler::LabelGrid,
        generators: &[GeneratorPoint],
        palette: &[Color],
        rng: &mut StdRng,
    ) -> Result<crate::coloring::palette::ColorAssignment> {
        match self.cli.color_algorithm {
            ColorArg::Random => random_assignment(generators, palette, rng),
            ColorArg::NoAdjacentSame => {
                let graph = build_adjacency(grid);
                solve_coloring(&graph, palette, ColorMode::Fixed)
            }
            ColorArg::MinimumCount => {
                let graph = build_adjacency(grid);
                solve_coloring(&graph, palette, ColorMode::Minimize)
            }
        }
    }
}

fn parse_point(raw: &str) -> Result<(f64, f64)> {
    let Some((x, y)) = raw.split_once(',') else {
        return Err(invalid_parameter(
            "point",
            &raw,
            &"expected the form x,y with normalized coordinates",
        ));
    };

    let parse = |s: &str| -> Result<f64> {
        s.trim()
            .parse::<f64>()
            .map_err(|e| invalid_parameter("point", &raw, &format!("bad coordinate: {e}")))
    };

    Ok((parse(x)?, parse(y)?))
}
