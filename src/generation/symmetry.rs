//! Recursive four-way mirrored tiling

use crate::generation::blend::{gradient, overflow};
use crate::generation::buffer::PixelBuffer;
use crate::generation::corruption::corrupt;
use crate::random::Sfmt;

/// Mirror a generated quarter tile into all four quadrants
///
/// Deeper levels build the tile recursively and corrupt it on a coin flip;
/// the finished buffer is always corrupted once more. Halving uses integer
/// division, so a 1x1 request mirrors an empty tile and stays black apart
/// from corruption.
pub fn symmetrical(
    width: u32,
    height: u32,
    depth: u32,
    num_colors: u8,
    clean: bool,
    random: &mut Sfmt,
) -> PixelBuffer {
    let tile = quadrant_tile(width / 2, height / 2, depth, num_colors, clean, random);
    let mut buffer = mirror_quadrants(&tile, width, height);
    corrupt(&mut buffer, clean, random);
    buffer
}

/// Build the top-left quarter of a symmetrical image
pub fn quadrant_tile(
    width: u32,
    height: u32,
    depth: u32,
    num_colors: u8,
    clean: bool,
    random: &mut Sfmt,
) -> PixelBuffer {
    if depth > 1 {
        let mut tile = symmetrical(width, height, depth - 1, num_colors, clean, random);
        if random.coin() {
            corrupt(&mut tile, clean, random);
        }
        tile
    } else if random.coin() {
        overflow(width, height, num_colors, random)
    } else {
        gradient(width, height, num_colors, random)
    }
}

/// Reflect `tile` horizontally and vertically into a `width` by `height`
/// buffer
///
/// Pixels the tile does not reach stay black.
pub fn mirror_quadrants(tile: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..tile.height() {
        for x in 0..tile.width() {
            let Some(rgb) = tile.rgb(x, y) else {
                continue;
            };
            let mirrored_x = width.saturating_sub(x + 1);
            let mirrored_y = height.saturating_sub(y + 1);
            buffer.set_rgb(x, y, rgb);
            buffer.set_rgb(mirrored_x, y, rgb);
            buffer.set_rgb(x, mirrored_y, rgb);
            buffer.set_rgb(mirrored_x, mirrored_y, rgb);
        }
    }
    buffer
}
