//! Input/output operations and error handling

/// Command-line parsing and the run orchestration
pub mod cli;
/// Default parameters and export settings
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG export and tile coloring
pub mod image;
/// JSON save and restore
pub mod persistence;
/// Terminal progress display
pub mod progress;
/// Seed configurations
pub mod seed;
/// Growth capture and GIF export
pub mod visualization;
