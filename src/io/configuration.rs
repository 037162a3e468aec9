//! Pipeline constants and runtime configuration defaults

// Placement
/// Candidate multiplier for Mitchell best-candidate sampling: the n-th point
/// draws `BEST_CANDIDATE_MULTIPLIER * n + 1` candidates
pub const BEST_CANDIDATE_MULTIPLIER: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: u32 = 10_000;

// Default values for configurable parameters
/// Default image width in pixels
pub const DEFAULT_WIDTH: u32 = 1920;
/// Default image height in pixels
pub const DEFAULT_HEIGHT: u32 = 1080;
/// Default number of regions
pub const DEFAULT_REGIONS: usize = 30;
/// Default background for unassigned pixels in animation frames
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
/// Default border stroke color
pub const DEFAULT_BORDER_COLOR: &str = "#FFFFFF";

// Output settings
/// Delay between growth animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 50;
/// How many frame delays the final animation frame is held for
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 25;
