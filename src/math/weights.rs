//! Per-pixel blend coefficients for base-point palettes

use std::f64::consts::{E, PI};

use crate::math::distance::euclidean;

/// Normalize logits into weights summing to one
///
/// The largest logit is subtracted before exponentiating so large logits
/// cannot overflow. An empty input yields an empty output.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max_logit = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scores: Vec<f64> = logits.iter().map(|l| (l - max_logit).exp()).collect();
    let denominator = scores.iter().fold(0.0, |acc, s| acc + s);
    scores.iter().map(|s| s / denominator).collect()
}

/// Closeness of a pixel to a base point, scaled to `[0, e·π]`
pub fn proximity(pixel: [f64; 2], base: [f64; 2], max_distance: f64) -> f64 {
    E * PI * (1.0 - euclidean(pixel, base) / max_distance)
}

/// Softmax-normalized weights of every base point at a pixel
pub fn gradient_coefficients(pixel: [f64; 2], bases: &[[f64; 2]], max_distance: f64) -> Vec<f64> {
    let logits: Vec<f64> = bases
        .iter()
        .map(|&base| proximity(pixel, base, max_distance))
        .collect();
    softmax(&logits)
}

/// Unnormalized log-proximity weights of every base point at a pixel
///
/// Weights do not sum to one and may be negative far from a base point.
pub fn overflow_coefficients(pixel: [f64; 2], bases: &[[f64; 2]], max_distance: f64) -> Vec<f64> {
    bases
        .iter()
        .map(|&base| proximity(pixel, base, max_distance).ln())
        .collect()
}
