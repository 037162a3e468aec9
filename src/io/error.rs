//! Error types for the partition-and-coloring pipeline
//!
//! Every variant is fatal: the pipeline either completes with a fully labeled
//! grid and a constraint-satisfying color map, or aborts before writing any
//! externally visible artifact.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Requested region count exceeds available pixel positions
    Capacity {
        /// Requested number of regions
        regions: usize,
        /// Grid width in pixels
        width: u32,
        /// Grid height in pixels
        height: u32,
    },

    /// A caller-supplied generator coordinate is unusable
    InvalidPoint {
        /// Normalized x coordinate as supplied
        x: f64,
        /// Normalized y coordinate as supplied
        y: f64,
        /// Why the point was rejected
        reason: String,
    },

    /// The palette cannot properly color the region-adjacency graph
    PaletteInsufficiency {
        /// Minimum number of colors needed, when a minimum was computed
        required: Option<u32>,
        /// Number of colors the caller supplied
        available: usize,
    },

    /// The ILP backend failed for a reason other than infeasibility
    Solver {
        /// Description of the backend failure
        reason: String,
    },

    /// A region present in the label grid received no color
    MissingRegionColor {
        /// Region id without an assignment entry
        region: u32,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity {
                regions,
                width,
                height,
            } => {
                write!(
                    f,
                    "Not enough pixels for {regions} regions on a {width}x{height} grid"
                )
            }
            Self::InvalidPoint { x, y, reason } => {
                write!(f, "Invalid generator point ({x}, {y}): {reason}")
            }
            Self::PaletteInsufficiency {
                required,
                available,
            } => match required {
                Some(needed) => write!(
                    f,
                    "Not enough colors to color without adjacent regions sharing one \
                     ({needed} needed, {available} available)"
                ),
                None => write!(
                    f,
                    "Not enough colors to color without adjacent regions sharing one \
                     ({available} available)"
                ),
            },
            Self::Solver { reason } => {
                write!(f, "Coloring solver failed: {reason}")
            }
            Self::MissingRegionColor { region } => {
                write!(f, "No color assigned to region {region}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a solver backend error
pub fn solver_error(reason: &impl ToString) -> GenerationError {
    GenerationError::Solver {
        reason: reason.to_string(),
    }
}
