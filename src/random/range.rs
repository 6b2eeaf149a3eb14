//! Bounded draws built on the raw word stream

use crate::math::conversion::truncate_toward_zero;
use crate::random::sfmt::Sfmt;

/// Size of the 32-bit word range as a float
const WORD_RANGE: f64 = 4_294_967_296.0;

impl Sfmt {
    /// Draw a value in `[min, max)`, truncated toward zero
    ///
    /// Bounds may be fractional or reversed; the scaled word is always
    /// `min + unit * (max - min)` with `unit` in `[0, 1)`.
    // A fused multiply-add would round differently
    #[allow(clippy::suboptimal_flops)]
    pub fn ranged(&mut self, min: f64, max: f64) -> i32 {
        let unit = f64::from(self.next_word()) / WORD_RANGE;
        truncate_toward_zero(min + unit * (max - min))
    }

    /// Draw an unsigned value in `[min, max)`
    ///
    /// Returns `min` when the range is empty.
    pub fn ranged_uint(&mut self, min: u32, max: u32) -> u32 {
        self.ranged(f64::from(min), f64::from(max))
            .max(0)
            .unsigned_abs()
    }

    /// Draw an index into a slice of `len` options
    pub fn index(&mut self, len: usize) -> usize {
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        self.ranged_uint(0, bound) as usize
    }

    /// Draw a fair coin
    pub fn coin(&mut self) -> bool {
        self.ranged_uint(0, 2) == 1
    }
}
