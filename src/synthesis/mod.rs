//! Attribute resolution, strategy selection and full image synthesis

/// Attribute resolution and end-to-end runs
pub mod orchestrator;
/// Size table lookup and ordinal-derived ranges
pub mod sizes;
/// Strategy decision table
pub mod strategy;

pub use orchestrator::{ResolvedAttributes, Synthesis, synthesize, synthesize_raw};
pub use strategy::Strategy;
