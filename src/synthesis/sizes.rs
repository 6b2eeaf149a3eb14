//! Size table lookup and ordinal-derived size ranges

use crate::io::configuration::SIZE_TABLE;
use crate::math::conversion::truncate_toward_zero;
use crate::random::Sfmt;

/// Largest addressable size index
pub const LAST_SIZE_INDEX: u8 = (SIZE_TABLE.len() - 1) as u8;

/// Clamp a size index into the table
pub fn clamp_index(index: u8) -> u8 {
    index.min(LAST_SIZE_INDEX)
}

/// Dimensions `(width, height)` of a size index, clamped into the table
pub fn dimensions(index: u8) -> (u32, u32) {
    SIZE_TABLE
        .get(usize::from(clamp_index(index)))
        .copied()
        .unwrap_or((1, 1))
}

/// Inclusive bounds of the size indices an ordinal may draw from
///
/// Early ordinals get small images: the lower bound is `trunc(log2(n / 4))`
/// and the upper bound two steps above it. Both bounds are clamped to the
/// last index; the lower bound can be negative for ordinals below four.
pub fn candidate_range(ordinal: u32) -> (i32, i32) {
    let base = (f64::from(ordinal) / 4.0).log2();
    let last = i32::from(LAST_SIZE_INDEX);
    let min = truncate_toward_zero(base).min(last);
    let max = truncate_toward_zero(base + 2.0).min(last);
    (min, max)
}

/// Draw a size index for an ordinal
///
/// Draws below zero clamp to the first entry.
pub fn draw_index(ordinal: u32, random: &mut Sfmt) -> u8 {
    let (min, max) = candidate_range(ordinal);
    let drawn = random.ranged(f64::from(min), f64::from(max) + 1.0);
    u8::try_from(drawn.max(0)).map_or(LAST_SIZE_INDEX, clamp_index)
}
