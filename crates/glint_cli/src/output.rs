//! Image file output.

use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::{color_to_rgb, ImageBuffer};
use image::{ImageFormat, RgbImage};

/// Convert a render buffer to an 8-bit image.
///
/// Render rows count up from the bottom of the view while image rows count
/// down from the top, so rows are flipped here.
pub fn to_rgb_image(buffer: &ImageBuffer) -> RgbImage {
    RgbImage::from_fn(buffer.width, buffer.height, |x, y| {
        let color = buffer.get(x, buffer.height - 1 - y);
        image::Rgb(color_to_rgb(color))
    })
}

/// Save a render buffer as an uncompressed TGA file.
pub fn save_tga(buffer: &ImageBuffer, path: &Path) -> Result<()> {
    to_rgb_image(buffer)
        .save_with_format(path, ImageFormat::Tga)
        .with_context(|| format!("Failed to write {}", path.display()))
}
