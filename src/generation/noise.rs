//! Per-pixel noise strategies

use crate::generation::buffer::{ChannelLayout, PixelBuffer};
use crate::io::configuration::SHADE_DOMINANCE;
use crate::math::conversion::wrap_to_u8;
use crate::random::Sfmt;

/// Largest 32-bit word as a float, used by legacy noise scaling
const WORD_MAX: f64 = 4_294_967_295.0;

/// Fill every channel with an independent draw in `[0, 256)`
///
/// Draws run red, green, blue per pixel in row-major order.
pub fn uniform(width: u32, height: u32, random: &mut Sfmt) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = channel_draw(random, 256);
            let g = channel_draw(random, 256);
            let b = channel_draw(random, 256);
            buffer.set_rgb(x, y, [r, g, b]);
        }
    }
    buffer
}

/// Tinted shading around one drawn set of dominant channels
///
/// Per pixel a bright value `a` and a darker value `b < a` are drawn;
/// dominant channels take `a` and the rest take `b`.
pub fn shades(width: u32, height: u32, random: &mut Sfmt) -> PixelBuffer {
    let dominance = SHADE_DOMINANCE
        .get(random.index(SHADE_DOMINANCE.len()))
        .copied()
        .unwrap_or([true; 3]);

    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let bright = random.ranged_uint(0, 256);
            let dark = random.ranged_uint(0, bright);
            let rgb = dominance.map(|dominant| (if dominant { bright } else { dark }) as u8);
            buffer.set_rgb(x, y, rgb);
        }
    }
    buffer
}

/// Opaque RGBA noise used by fixed-layout tickets
///
/// Each color channel is a raw word scaled by `255 / (2^32 - 1)` and
/// truncated, seeded directly rather than through attribute resolution.
pub fn legacy_noise(width: u32, height: u32, seed: u32) -> PixelBuffer {
    let mut random = Sfmt::new(seed);
    let mut buffer = PixelBuffer::with_layout(width, height, ChannelLayout::Rgba);
    for y in 0..height {
        for x in 0..width {
            let r = legacy_channel(&mut random);
            let g = legacy_channel(&mut random);
            let b = legacy_channel(&mut random);
            buffer.set_rgb(x, y, [r, g, b]);
        }
    }
    buffer
}

fn channel_draw(random: &mut Sfmt, bound: u32) -> u8 {
    random.ranged_uint(0, bound) as u8
}

fn legacy_channel(random: &mut Sfmt) -> u8 {
    wrap_to_u8(f64::from(random.next_word()) / WORD_MAX * 255.0)
}
