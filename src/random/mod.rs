//! Deterministic random source
//!
//! A single seeded generator drives every decision of one synthesis run.

/// Bounded and categorical draws
pub mod range;
/// SFMT-19937 word generator
pub mod sfmt;

pub use sfmt::Sfmt;
