//! Strategy decision table
//!
//! The table is part of the output distribution: changing a tier bound or
//! the order of options within a tier changes every image generated from
//! then on.

use std::fmt;

use crate::generation::blend::{gradient, overflow};
use crate::generation::buffer::PixelBuffer;
use crate::generation::noise::{shades, uniform};
use crate::generation::symmetry::symmetrical;
use crate::io::configuration::{BLEND_TIER_MAX, FLAT_TIER_MAX, NOISE_TIER_MAX};
use crate::random::Sfmt;

/// Pixel-fill algorithm used for one image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Independent per-channel noise
    Uniform,
    /// Tinted per-pixel shading
    Shades,
    /// Softmax palette blend
    Gradient,
    /// Unnormalized palette blend with wraparound
    Overflow,
    /// Recursive four-way mirrored tiling
    Symmetrical,
}

const NOISE_TIER: [Strategy; 2] = [Strategy::Uniform, Strategy::Shades];
const FLAT_TIER: [Strategy; 4] = [
    Strategy::Uniform,
    Strategy::Shades,
    Strategy::Gradient,
    Strategy::Overflow,
];
const BLEND_TIER: [Strategy; 3] = [
    Strategy::Gradient,
    Strategy::Overflow,
    Strategy::Symmetrical,
];

impl Strategy {
    /// Pick the strategy for an image of the given size
    ///
    /// A clean request on a square image always tiles symmetrically without
    /// drawing. Otherwise the tier holding both dimensions decides, drawing
    /// once when it offers more than one option.
    pub fn select(width: u32, height: u32, clean: Option<bool>, random: &mut Sfmt) -> Self {
        if clean == Some(true) && width == height {
            return Self::Symmetrical;
        }

        let fits = |bound: u32| width <= bound && height <= bound;
        let tier: &[Self] = if fits(NOISE_TIER_MAX) {
            &NOISE_TIER
        } else if fits(FLAT_TIER_MAX) {
            &FLAT_TIER
        } else if fits(BLEND_TIER_MAX) {
            &BLEND_TIER
        } else {
            return Self::Symmetrical;
        };

        tier.get(random.index(tier.len()))
            .copied()
            .unwrap_or(Self::Symmetrical)
    }

    /// Fill a buffer with this strategy
    pub fn render(
        self,
        width: u32,
        height: u32,
        depth: u32,
        num_colors: u8,
        clean: bool,
        random: &mut Sfmt,
    ) -> PixelBuffer {
        match self {
            Self::Uniform => uniform(width, height, random),
            Self::Shades => shades(width, height, random),
            Self::Gradient => gradient(width, height, num_colors, random),
            Self::Overflow => overflow(width, height, num_colors, random),
            Self::Symmetrical => symmetrical(width, height, depth, num_colors, clean, random),
        }
    }

    /// Lowercase strategy name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Shades => "shades",
            Self::Gradient => "gradient",
            Self::Overflow => "overflow",
            Self::Symmetrical => "symmetrical",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
