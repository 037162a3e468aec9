//! Color types, hex parsing, and unconstrained assignment

use std::collections::BTreeMap;

use rand::{Rng, rngs::StdRng};

use crate::geometry::placement::{GeneratorPoint, RegionId};
use crate::io::error::{Result, invalid_parameter};

/// An RGB color with channel values in `[0, 255]`
pub type Color = [u8; 3];

/// Mapping from region id to its assigned color
///
/// Every region present in the label grid has exactly one entry; when
/// adjacency constraints were requested, adjacent regions hold different
/// colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    colors: BTreeMap<RegionId, Color>,
}

impl ColorAssignment {
    /// Create an empty assignment
    pub const fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Record the color of a region, replacing any previous entry
    pub fn insert(&mut self, region: RegionId, color: Color) {
        self.colors.insert(region, color);
    }

    /// The color assigned to a region
    pub fn color(&self, region: RegionId) -> Option<Color> {
        self.colors.get(&region).copied()
    }

    /// Number of colored regions
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no regions are colored
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Parse a `"#RRGGBB"` or `"RRGGBB"` hex string into a color
///
/// # Errors
///
/// Returns an invalid-parameter error for malformed strings.
pub fn parse_hex(value: &str) -> Result<Color> {
    let digits = value.strip_prefix('#').unwrap_or(value);

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid_parameter(
            "color",
            &value,
            &"expected six hex digits, optionally prefixed with '#'",
        ));
    }

    let mut channels = [0_u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let pair = digits
            .get(i * 2..i * 2 + 2)
            .ok_or_else(|| invalid_parameter("color", &value, &"expected six hex digits"))?;
        *channel = u8::from_str_radix(pair, 16)
            .map_err(|e| invalid_parameter("color", &value, &format!("bad hex digits: {e}")))?;
    }

    Ok(channels)
}

/// Assign every region an independent uniform draw from the palette
///
/// Used when no adjacency constraint is requested; colors may repeat on
/// adjacent regions.
///
/// # Errors
///
/// Returns an invalid-parameter error for an empty palette.
pub fn random_assignment(
    generators: &[GeneratorPoint],
    palette: &[Color],
    rng: &mut StdRng,
) -> Result<ColorAssignment> {
    if palette.is_empty() {
        return Err(invalid_parameter(
            "colors",
            &"[]",
            &"palette must contain at least one color",
        ));
    }

    let mut assignment = ColorAssignment::new();
    for generator in generators {
        let index = rng.random_range(0..palette.len());
        let color = palette.get(index).copied().unwrap_or([0, 0, 0]);
        assignment.insert(generator.id, color);
    }

    Ok(assignment)
}
