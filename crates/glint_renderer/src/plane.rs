//! Infinite plane intersection.

use glint_core::Plane;
use glint_math::{Point, Ray, Vector};

use crate::hittable::{Surface, HIT_RANGE};

impl Surface for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let normal = self.normal();
        let denom = ray.direction.dot(normal);
        if denom == 0.0 {
            return None;
        }

        let t = (self.anchor() - ray.start).dot(normal) / denom;
        HIT_RANGE.surrounds(t).then_some(t)
    }

    /// The stored normal, regardless of which side the ray arrives from.
    fn surface_normal(&self, _point: Point, _ray: &Ray) -> Vector {
        self.normal()
    }
}
