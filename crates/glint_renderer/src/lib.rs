//! Glint Renderer - Whitted-style CPU ray tracer
//!
//! Renders a [`Scene`](glint_core::Scene) with Blinn-Phong local shading,
//! hard shadows from a single point light, and bounded recursive mirror
//! reflection. One primary ray per pixel, no sampling noise: the same scene
//! always renders the same image, sequentially or in parallel buckets.

mod bucket;
mod hittable;
mod plane;
mod renderer;
mod shading;
mod shadow;
mod sphere;
mod trace;
mod triangle;

pub use bucket::{
    generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use hittable::{closest_hit, Hit, Surface, HIT_EPSILON, HIT_RANGE};
pub use renderer::{channel_to_u8, color_to_rgb, render, render_pixel, ImageBuffer, RenderConfig};
pub use shading::{local_shade, Shade};
pub use shadow::is_lit;
pub use sphere::roots as sphere_roots;
pub use trace::{reflect, trace, TraceStats, MAX_BOUNCE_DEPTH};

/// Re-export common math types from glint_math
pub use glint_math::{Interval, Point, Ray, Vector};
