//! CLI entry point for the Voronoi mosaic generator

use clap::Parser;
use voronoize::io::cli::{Cli, Pipeline};

fn main() -> voronoize::Result<()> {
    let cli = Cli::parse();
    let pipeline = Pipeline::new(cli);
    pipeline.run()
}
