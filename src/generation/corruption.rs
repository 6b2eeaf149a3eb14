//! Localized corruption passes over a finished buffer
//!
//! A pass draws up to two circular-ish regions, one shared variation and
//! one shared distance metric, then rewrites every pixel that falls within
//! a region. Overlapping regions apply the variation once per region.

// Fused multiply-add rounds differently and would change generated images
#![allow(clippy::suboptimal_flops)]

use crate::generation::buffer::PixelBuffer;
use crate::io::configuration::{CORRUPTION_RADIUS_DIVISOR, MAX_CORRUPTION_POINTS};
use crate::math::conversion::wrap_to_u8;
use crate::math::distance::DistanceMetric;
use crate::random::Sfmt;

/// Rewrite applied to pixels inside a corruption region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variation {
    /// Replace each channel `c` with `255 - c`
    Invert,
    /// Rotate channels so red takes green, green takes blue, blue takes red
    Rotate,
    /// Mix fresh draws in, weighted toward the region center
    RandomBlend,
    /// Replace the pixel with three fresh draws
    Replace,
}

impl Variation {
    /// Variations drawn among when the output must stay clean
    pub const CLEAN_COUNT: u32 = 2;
    /// Variations drawn among otherwise
    pub const COUNT: u32 = 4;

    /// Map a draw to a variation
    pub const fn from_draw(draw: u32) -> Self {
        match draw {
            0 => Self::Invert,
            1 => Self::Rotate,
            2 => Self::RandomBlend,
            _ => Self::Replace,
        }
    }

    /// Rewrite one pixel at `distance` from a region center of `radius`
    pub fn apply(self, rgb: [u8; 3], distance: f64, radius: i32, random: &mut Sfmt) -> [u8; 3] {
        let [r, g, b] = rgb;
        match self {
            Self::Invert => [u8::MAX - r, u8::MAX - g, u8::MAX - b],
            Self::Rotate => [g, b, r],
            Self::RandomBlend => {
                let coefficient = 1.0 - distance / f64::from(radius);
                rgb.map(|old| {
                    let fresh = f64::from(random.ranged_uint(0, 256));
                    wrap_to_u8(coefficient * fresh + (1.0 - coefficient) * f64::from(old))
                })
            }
            Self::Replace => [(); 3].map(|()| random.ranged_uint(0, 256) as u8),
        }
    }
}

/// Center and reach of one corruption region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CorruptionPoint {
    /// Center column
    pub x: u32,
    /// Center row
    pub y: u32,
    /// Inclusive reach; zero still covers the center pixel
    pub radius: i32,
}

impl CorruptionPoint {
    fn center(self) -> [f64; 2] {
        [f64::from(self.x), f64::from(self.y)]
    }
}

/// Everything drawn up front for one corruption pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorruptionSpec {
    /// Region centers and radii
    pub points: Vec<CorruptionPoint>,
    /// Rewrite shared by every region
    pub variation: Variation,
    /// Distance measure shared by every region
    pub metric: DistanceMetric,
}

impl CorruptionSpec {
    /// Draw the regions, variation and metric for a buffer of `width` by
    /// `height`
    pub fn draw(width: u32, height: u32, clean: bool, random: &mut Sfmt) -> Self {
        let count = random.ranged_uint(0, MAX_CORRUPTION_POINTS);
        let points = (0..count)
            .map(|_| CorruptionPoint {
                x: random.ranged_uint(0, width),
                y: random.ranged_uint(0, height),
                radius: random.ranged(1.0, f64::from(width) / CORRUPTION_RADIUS_DIVISOR),
            })
            .collect();

        let bound = if clean {
            Variation::CLEAN_COUNT
        } else {
            Variation::COUNT
        };
        let variation = Variation::from_draw(random.ranged_uint(0, bound));
        let metric = DistanceMetric::from_draw(random.ranged_uint(0, DistanceMetric::COUNT));

        Self {
            points,
            variation,
            metric,
        }
    }

    /// Rewrite every pixel inside a region, in row-major order
    ///
    /// Pixel-level draws of blending variations continue from `random`.
    pub fn apply(&self, buffer: &mut PixelBuffer, random: &mut Sfmt) {
        if self.points.is_empty() {
            return;
        }

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let pixel = [f64::from(x), f64::from(y)];
                for point in &self.points {
                    let distance = self.metric.measure(pixel, point.center());
                    if distance > f64::from(point.radius) {
                        continue;
                    }
                    if let Some(rgb) = buffer.rgb(x, y) {
                        let rewritten = self.variation.apply(rgb, distance, point.radius, random);
                        buffer.set_rgb(x, y, rewritten);
                    }
                }
            }
        }
    }
}

/// Draw and apply one corruption pass
///
/// Returns what was drawn. A pass with zero points leaves the buffer
/// untouched but still consumes the variation and metric draws.
pub fn corrupt(buffer: &mut PixelBuffer, clean: bool, random: &mut Sfmt) -> CorruptionSpec {
    let spec = CorruptionSpec::draw(buffer.width(), buffer.height(), clean, random);
    log::trace!(
        "corruption over {}x{}: {} point(s), {:?}, {:?}",
        buffer.width(),
        buffer.height(),
        spec.points.len(),
        spec.variation,
        spec.metric
    );
    spec.apply(buffer, random);
    spec
}
