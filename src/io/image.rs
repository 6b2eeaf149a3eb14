//! PNG encoding of generated pixel buffers

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::generation::buffer::{ChannelLayout, PixelBuffer};
use crate::io::error::{GenerationError, Result};

const fn color_type(layout: ChannelLayout) -> ExtendedColorType {
    match layout {
        ChannelLayout::Rgb => ExtendedColorType::Rgb8,
        ChannelLayout::Rgba => ExtendedColorType::Rgba8,
    }
}

/// Encode a buffer as an 8-bit PNG in memory
///
/// # Errors
///
/// Returns an encode error if the encoder rejects the buffer, for example
/// when it has no pixels
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        &buffer.to_bytes(),
        buffer.width(),
        buffer.height(),
        color_type(buffer.layout()),
    )?;
    Ok(png)
}

/// Encode a buffer as PNG and write it to `output_path`
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The buffer cannot be encoded
/// - The file cannot be written
pub fn save_png(buffer: &PixelBuffer, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let png = encode_png(buffer).map_err(|e| match e {
        GenerationError::ImageEncode { source } => GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    std::fs::write(output_path, png).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write image",
        source: e,
    })
}
