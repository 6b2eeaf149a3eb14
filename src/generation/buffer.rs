//! Row-major interleaved pixel storage
//!
//! Pixels live in an `(height, width, channels)` array so the raw byte
//! order matches what image encoders expect: rows top to bottom, pixels
//! left to right, channels interleaved.

use ndarray::Array3;

/// Channel layout of a pixel buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Red, green, blue
    Rgb,
    /// Red, green, blue and a constant opaque alpha
    Rgba,
}

impl ChannelLayout {
    /// Bytes per pixel
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Owned pixel grid of fixed dimensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array3<u8>,
    layout: ChannelLayout,
}

impl PixelBuffer {
    /// Create a black RGB buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_layout(width, height, ChannelLayout::Rgb)
    }

    /// Create a black buffer with the given layout
    ///
    /// RGBA buffers start fully opaque.
    pub fn with_layout(width: u32, height: u32, layout: ChannelLayout) -> Self {
        let shape = (height as usize, width as usize, layout.channels());
        let pixels = match layout {
            ChannelLayout::Rgb => Array3::zeros(shape),
            ChannelLayout::Rgba => {
                Array3::from_shape_fn(shape, |(_, _, c)| if c == 3 { u8::MAX } else { 0 })
            }
        };
        Self { pixels, layout }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.dim().1 as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.dim().0 as u32
    }

    /// Channel layout
    pub const fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Color channels of a pixel, or `None` outside the buffer
    pub fn rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let (x, y) = (x as usize, y as usize);
        Some([
            *self.pixels.get([y, x, 0])?,
            *self.pixels.get([y, x, 1])?,
            *self.pixels.get([y, x, 2])?,
        ])
    }

    /// Overwrite the color channels of a pixel
    ///
    /// Writes outside the buffer are ignored; alpha is left untouched.
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let (x, y) = (x as usize, y as usize);
        for (channel, value) in rgb.into_iter().enumerate() {
            if let Some(slot) = self.pixels.get_mut([y, x, channel]) {
                *slot = value;
            }
        }
    }

    /// Copy with an opaque alpha channel appended
    #[must_use]
    pub fn to_rgba(&self) -> Self {
        let mut rgba = Self::with_layout(self.width(), self.height(), ChannelLayout::Rgba);
        for y in 0..self.height() {
            for x in 0..self.width() {
                if let Some(rgb) = self.rgb(x, y) {
                    rgba.set_rgb(x, y, rgb);
                }
            }
        }
        rgba
    }

    /// Raw interleaved bytes in row-major order
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().copied().collect()
    }
}
