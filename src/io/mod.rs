//! Image input, PNG output, configuration, errors and the command-line front end

/// Batch command-line interface
pub mod cli;
/// Puzzle constants and configuration
pub mod configuration;
/// Error taxonomy
pub mod error;
/// Image sources and export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
