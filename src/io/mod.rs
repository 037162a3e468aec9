//! Input/output operations and error handling
//!
//! Rendering collaborators consuming the core's plain data: PNG stills,
//! animated GIF growth sequences, the CLI surface, and progress display.

/// Growth-sequence GIF export
pub mod animation;
/// Command-line interface and pipeline orchestration
pub mod cli;
/// Pipeline constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering and border overdraw
pub mod image;
/// Progress display
pub mod progress;
