//! Single-threaded ray tracing renderer.
//!
//! Implements the per-pixel driver:
//! - One primary ray through the center of each pixel
//! - Blinn-Phong shading with shadow feelers
//! - Bounded recursive mirror reflection

use glint_core::{Pigment, Scene};
use glint_math::{Interval, Ray};

use crate::bucket::DEFAULT_BUCKET_SIZE;
use crate::trace::{trace, TraceStats};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Color of pixels whose primary ray hits nothing
    pub background: Pigment,
    /// Edge length of the square tiles used by the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: Pigment::BLACK,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Set the output resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Convert a color channel to 8 bits, clamping `c * 255` into `[0, 255]`.
#[inline]
pub fn channel_to_u8(c: f32) -> u8 {
    Interval::new(0.0, 255.0).clamp(c * 255.0) as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Pigment) -> [u8; 3] {
    [
        channel_to_u8(color.r),
        channel_to_u8(color.g),
        channel_to_u8(color.b),
    ]
}

/// Trace the primary ray of pixel `(i, j)`; row `j = 0` is the bottom of the view.
pub fn render_pixel(
    scene: &Scene,
    i: u32,
    j: u32,
    config: &RenderConfig,
    stats: &mut TraceStats,
) -> Pigment {
    let ray = Ray::through_pixel(i, j, config.width, config.height, &scene.camera);
    trace(scene, &ray, config.background, stats)
}

/// Image buffer for storing render output.
///
/// Addressed by `(x, y)` with `y = 0` the bottom row of the view.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pigment>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pigment::BLACK; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Pigment {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Pigment) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGB bytes, bottom row first.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer, one pixel at a time.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.width, config.height);
    let mut stats = TraceStats::default();

    for j in 0..config.height {
        for i in 0..config.width {
            let color = render_pixel(scene, i, j, config, &mut stats);
            image.set_pixel(i, j, color);
        }
    }

    log_summary(&stats);
    image
}

pub(crate) fn log_summary(stats: &TraceStats) {
    log::info!(
        "Traced {} primary rays: {} shaded hits, {} shadow feelers, deepest bounce {}",
        stats.primary_rays,
        stats.evaluations,
        stats.shadow_feelers,
        stats.deepest_bounce
    );
}
