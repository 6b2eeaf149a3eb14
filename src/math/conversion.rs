//! Numeric narrowing rules shared by every generation step
//!
//! Pixel values are produced in f64 and stored into 8-bit channels. Stored
//! values are truncated toward zero and reduced modulo 256 rather than
//! clamped, which is what gives overflow blending its aliased look.

/// Truncate toward zero into an `i32`
///
/// Non-finite inputs map to zero.
pub fn truncate_toward_zero(value: f64) -> i32 {
    if value.is_finite() {
        value.trunc() as i32
    } else {
        0
    }
}

/// Store a floating value into an 8-bit channel with wraparound
///
/// The value is truncated toward zero and reduced modulo 256, so `256.7`
/// stores `0` and `-1.5` stores `255`. NaN and infinities store `0`.
pub fn wrap_to_u8(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    (value.trunc() as i64).rem_euclid(256) as u8
}
