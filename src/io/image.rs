//! PNG rendering and border overdraw
//!
//! Paints a labeled grid with its region colors, unassigned pixels taking the
//! background color, and optionally strokes region boundaries by over-drawing
//! filled discs at label mismatches.

use image::{Rgba, RgbaImage};

use crate::coloring::palette::{Color, ColorAssignment};
use crate::io::error::{GenerationError, Result};
use crate::partition::labeler::LabelGrid;

/// Border stroke parameters
#[derive(Debug, Clone, Copy)]
pub struct BorderStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke thickness in pixels; a disc of radius `size / 2` is drawn at
    /// every boundary pixel
    pub size: u32,
}

/// Render a labeled grid into an RGBA image
///
/// # Errors
///
/// Returns [`GenerationError::MissingRegionColor`] when a labeled region has
/// no assignment entry.
pub fn render_grid(
    grid: &LabelGrid,
    assignment: &ColorAssignment,
    background: Color,
) -> Result<RgbaImage> {
    let mut img = RgbaImage::new(grid.width(), grid.height());

    for (x, y, label) in grid.pixels() {
        let [r, g, b] = match label {
            Some(region) => assignment
                .color(region)
                .ok_or(GenerationError::MissingRegionColor { region })?,
            None => background,
        };
        img.put_pixel(x, y, Rgba([r, g, b, 255]));
    }

    Ok(img)
}

/// Stroke region boundaries onto an already rendered image
///
/// A pixel is a boundary pixel when its label differs from its right or down
/// neighbor; the comparison includes unassigned pixels so partially grown
/// frames get their fronts stroked the same way.
pub fn draw_borders(grid: &LabelGrid, img: &mut RgbaImage, style: BorderStyle) {
    let radius = i64::from(style.size / 2);
    let [r, g, b] = style.color;
    let stroke = Rgba([r, g, b, 255]);

    for (x, y, label) in grid.pixels() {
        let right = (x + 1 < grid.width()).then(|| grid.label(x + 1, y));
        let down = (y + 1 < grid.height()).then(|| grid.label(x, y + 1));

        let boundary = right.is_some_and(|neighbor| neighbor != label)
            || down.is_some_and(|neighbor| neighbor != label);
        if !boundary {
            continue;
        }

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let px = i64::from(x) + dx;
                let py = i64::from(y) + dy;
                if px < 0 || py < 0 || px >= i64::from(grid.width()) || py >= i64::from(grid.height())
                {
                    continue;
                }
                img.put_pixel(px as u32, py as u32, stroke);
            }
        }
    }
}

/// Render a grid and save it as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error when a region lacks a color, the parent directory cannot
/// be created, or the image cannot be written.
pub fn export_png(
    grid: &LabelGrid,
    assignment: &ColorAssignment,
    background: Color,
    border: Option<BorderStyle>,
    output_path: &str,
) -> Result<()> {
    let mut img = render_grid(grid, assignment, background)?;

    if let Some(style) = border
        && style.size > 0
    {
        draw_borders(grid, &mut img, style);
    }

    if let Some(parent) = std::path::Path::new(output_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
