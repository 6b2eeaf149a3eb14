//! Palette blending strategies
//!
//! A palette pairs drawn base points with drawn base colors. Every pixel
//! mixes the base colors by weights derived from its distance to each base
//! point: softmax-normalized for gradients, raw log-proximity for overflow.

// Fused multiply-add rounds differently and would change generated images
#![allow(clippy::suboptimal_flops)]

use crate::generation::buffer::PixelBuffer;
use crate::math::conversion::wrap_to_u8;
use crate::math::weights::{gradient_coefficients, overflow_coefficients};
use crate::random::Sfmt;

/// Anchor coordinate of one base color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasePoint {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

/// Color anchored at a base point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl BaseColor {
    const fn channel(self, index: usize) -> u8 {
        match index {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }
}

/// Base points and their colors, index-aligned
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    /// Anchor coordinates
    pub points: Vec<BasePoint>,
    /// Colors, one per anchor
    pub colors: Vec<BaseColor>,
}

impl Palette {
    /// Draw `count` anchors with colors
    ///
    /// Each entry consumes five draws: x, y, red, green, blue.
    pub fn draw(width: u32, height: u32, count: u8, random: &mut Sfmt) -> Self {
        let mut palette = Self::default();
        for _ in 0..count {
            palette.points.push(BasePoint {
                x: random.ranged_uint(0, width),
                y: random.ranged_uint(0, height),
            });
            palette.colors.push(BaseColor {
                r: random.ranged_uint(0, 256) as u8,
                g: random.ranged_uint(0, 256) as u8,
                b: random.ranged_uint(0, 256) as u8,
            });
        }
        palette
    }

    fn anchors(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [f64::from(p.x), f64::from(p.y)])
            .collect()
    }
}

/// How palette weights are derived
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Softmax over scaled proximity; weights sum to one
    Gradient,
    /// Natural log of scaled proximity, unnormalized; sums wrap modulo 256
    Overflow,
}

/// Render a palette without consuming any draws
pub fn blend(width: u32, height: u32, palette: &Palette, mode: BlendMode) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    let anchors = palette.anchors();
    let (w, h) = (f64::from(width), f64::from(height));
    let max_distance = (w * w + h * h).sqrt();

    for y in 0..height {
        for x in 0..width {
            let pixel = [f64::from(x), f64::from(y)];
            let coefficients = match mode {
                BlendMode::Gradient => gradient_coefficients(pixel, &anchors, max_distance),
                BlendMode::Overflow => overflow_coefficients(pixel, &anchors, max_distance),
            };

            let mut rgb = [0; 3];
            for (channel, slot) in rgb.iter_mut().enumerate() {
                let sum = palette
                    .colors
                    .iter()
                    .zip(&coefficients)
                    .fold(0.0, |acc, (color, weight)| {
                        acc + f64::from(color.channel(channel)) * weight
                    });
                *slot = wrap_to_u8(sum);
            }
            buffer.set_rgb(x, y, rgb);
        }
    }
    buffer
}

/// Smooth gradient between `num_colors` drawn anchors
pub fn gradient(width: u32, height: u32, num_colors: u8, random: &mut Sfmt) -> PixelBuffer {
    let palette = Palette::draw(width, height, num_colors, random);
    blend(width, height, &palette, BlendMode::Gradient)
}

/// Aliased blend between `num_colors` drawn anchors
pub fn overflow(width: u32, height: u32, num_colors: u8, random: &mut Sfmt) -> PixelBuffer {
    let palette = Palette::draw(width, height, num_colors, random);
    blend(width, height, &palette, BlendMode::Overflow)
}
