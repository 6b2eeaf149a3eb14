//! Distance measures between pixel coordinates
//!
//! `axis_sum` and `axis_min` take the square root of each squared axis
//! difference before combining. They are not textbook L1/L0 norms and are
//! kept exactly as written since they shape the corruption regions.

// Fused multiply-add rounds differently and would change generated images
#![allow(clippy::suboptimal_flops)]

/// Straight-line distance
pub fn euclidean(from: [f64; 2], to: [f64; 2]) -> f64 {
    let dx = from[0] - to[0];
    let dy = from[1] - to[1];
    (dx * dx + dy * dy).sqrt()
}

/// Sum of per-axis distances
pub fn axis_sum(from: [f64; 2], to: [f64; 2]) -> f64 {
    let dx = from[0] - to[0];
    let dy = from[1] - to[1];
    (dx * dx).sqrt() + (dy * dy).sqrt()
}

/// Smaller of the per-axis distances
pub fn axis_min(from: [f64; 2], to: [f64; 2]) -> f64 {
    let dx = from[0] - to[0];
    let dy = from[1] - to[1];
    (dx * dx).sqrt().min((dy * dy).sqrt())
}

/// Distance measure chosen for a corruption pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMetric {
    /// [`axis_min`]
    AxisMin,
    /// [`axis_sum`]
    AxisSum,
    /// [`euclidean`]
    Euclidean,
}

impl DistanceMetric {
    /// Number of metrics a draw selects among
    pub const COUNT: u32 = 3;

    /// Map a draw in `[0, COUNT)` to a metric
    pub const fn from_draw(draw: u32) -> Self {
        match draw {
            0 => Self::AxisMin,
            1 => Self::AxisSum,
            _ => Self::Euclidean,
        }
    }

    /// Measure the distance between two points
    pub fn measure(self, from: [f64; 2], to: [f64; 2]) -> f64 {
        match self {
            Self::AxisMin => axis_min(from, to),
            Self::AxisSum => axis_sum(from, to),
            Self::Euclidean => euclidean(from, to),
        }
    }
}
