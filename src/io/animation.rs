//! Growth-sequence GIF export
//!
//! Encodes the progressive growth frames as an animated GIF. Every frame is
//! painted with the final color assignment so regions keep their color while
//! growing; unassigned pixels take the animation background color. The final
//! frame is held longer for visibility.

use image::{Delay, Frame};

use crate::coloring::palette::{Color, ColorAssignment};
use crate::io::configuration::FINAL_FRAME_HOLD_FACTOR;
use crate::io::error::{GenerationError, Result};
use crate::io::image::{BorderStyle, draw_borders, render_grid};
use crate::io::progress::PipelineProgress;
use crate::partition::labeler::LabelGrid;

/// Encode growth frames as an animated GIF, returning the frame count
///
/// # Errors
///
/// Returns an error when the sequence yields no frames, a region lacks a
/// color, or file creation or GIF encoding fails.
pub fn export_growth_gif(
    frames: impl Iterator<Item = LabelGrid>,
    assignment: &ColorAssignment,
    background: Color,
    border: Option<BorderStyle>,
    output_path: &str,
    frame_delay_ms: u32,
    progress: &PipelineProgress,
) -> Result<usize> {
    let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
    let mut encoded = Vec::new();

    for grid in frames {
        let mut img = render_grid(&grid, assignment, background)?;
        if let Some(style) = border
            && style.size > 0
        {
            draw_borders(&grid, &mut img, style);
        }
        encoded.push(Frame::from_parts(img, 0, 0, delay));
        progress.frame_tick();
    }

    if encoded.is_empty() {
        return Err(GenerationError::InvalidParameter {
            parameter: "animate",
            value: String::new(),
            reason: "growth sequence produced no frames".to_string(),
        });
    }

    // Hold the completed partition on screen before the GIF loops
    if let Some(last) = encoded.last().map(|f| f.buffer().clone()) {
        encoded.push(Frame::from_parts(
            last,
            0,
            0,
            Delay::from_numer_denom_ms(frame_delay_ms * FINAL_FRAME_HOLD_FACTOR, 1),
        ));
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

    let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
        path: output_path.into(),
        operation: "create file",
        source: e,
    })?;

    let frame_count = encoded.len() - 1;
    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(encoded)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(frame_count)
}
