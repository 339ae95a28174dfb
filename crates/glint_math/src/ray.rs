use std::fmt;

use crate::{Camera, Point, Vector};

/// A ray in 3D space with a start point and a unit direction.
///
/// Every constructor normalizes the direction, so the ray parameter `t` is
/// always a world-space distance from `start`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub start: Point,
    pub direction: Vector,
}

impl Ray {
    /// Create a new ray.
    pub fn new(start: Point, direction: Vector) -> Self {
        Self {
            start,
            direction: direction.normalized(),
        }
    }

    /// Primary ray through the center of pixel `(i, j)`.
    ///
    /// Pixel `(0, 0)` is the bottom-left corner of the view plane. The sample
    /// offsets interpolate linearly across the plane extent given by the
    /// camera's `right` and `up` magnitudes.
    pub fn through_pixel(i: u32, j: u32, width: u32, height: u32, camera: &Camera) -> Self {
        let (extent_u, extent_v) = camera.view_extent();
        let (left, right) = (-extent_u / 2.0, extent_u / 2.0);
        let (bottom, top) = (-extent_v / 2.0, extent_v / 2.0);

        let us = left + (right - left) * (i as f32 + 0.5) / width as f32;
        let vs = bottom + (top - bottom) * (j as f32 + 0.5) / height as f32;

        let (u, v, w) = camera.basis();
        let direction = u * us + v * vs - w;

        Self::new(camera.center, direction)
    }

    /// Mirror reflection of `incident` about the unit `normal` at `surface`.
    ///
    /// The new ray starts exactly on the surface; self-hits are rejected by the
    /// intersection epsilon, not by nudging the origin.
    pub fn reflected(incident: &Ray, surface: Point, normal: Vector) -> Self {
        let d = incident.direction;
        let direction = d + normal * (2.0 * normal.dot(-d));
        Self::new(surface, direction)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: start + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Point {
        self.start + self.direction * t
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} -> {{{}}}", self.start, self.direction)
    }
}
