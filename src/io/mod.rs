//! Input/output, configuration and error handling

/// Command-line parsing and batch generation
pub mod cli;
/// Fixed tables and runtime defaults
pub mod configuration;
/// Crate error type
pub mod error;
/// PNG encoding
pub mod image;
/// Batch progress display
pub mod progress;
