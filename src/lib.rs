//! Deterministic generation of small pixel-art images from a single seed
//!
//! One 32-bit seed drives an SFMT random source that resolves any missing
//! attributes, picks a fill strategy from a fixed decision table and draws
//! every pixel. Ticket records carrying the requested attributes are packed
//! into fixed 64-byte blobs for an external key-value store.

#![forbid(unsafe_code)]

/// Ticket record layouts and attribute types
pub mod codec;
/// Pixel buffers and fill strategies
pub mod generation;
/// Input/output operations, configuration and error handling
pub mod io;
/// Distance measures, blend weights and numeric narrowing
pub mod math;
/// Seeded SFMT random source
pub mod random;
/// Attribute resolution and strategy selection
pub mod synthesis;
/// Ticket pricing, naming and bookkeeping
pub mod ticket;

pub use io::error::{GenerationError, Result};
