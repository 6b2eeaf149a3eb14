//! Mathematical utilities for pixel synthesis

/// Float-to-channel narrowing and truncation rules
pub mod conversion;
/// Distance measures between pixel coordinates
pub mod distance;
/// Blend coefficients derived from base-point proximity
pub mod weights;
