//! Pixel generation strategies and the buffer they draw into

/// Palette blending into gradients and aliased overflow
pub mod blend;
/// Interleaved pixel storage
pub mod buffer;
/// Localized region rewrites
pub mod corruption;
/// Independent per-pixel noise and shades
pub mod noise;
/// Recursive mirrored tiling
pub mod symmetry;

pub use buffer::{ChannelLayout, PixelBuffer};
