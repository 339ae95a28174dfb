//! Sphere intersection.

use glint_core::Sphere;
use glint_math::{Point, Ray, Vector};

use crate::hittable::{Surface, HIT_RANGE};

/// Both roots of the ray/sphere quadratic, nearest first.
///
/// Returns `None` when the discriminant is negative. A tangent ray yields the
/// same root twice.
pub fn roots(sphere: &Sphere, ray: &Ray) -> Option<(f32, f32)> {
    let oc = ray.start - sphere.center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * ray.direction.dot(oc);
    let c = oc.dot(oc) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    if discriminant == 0.0 {
        let t = -b / (2.0 * a);
        return Some((t, t));
    }

    let sqrtd = discriminant.sqrt();
    Some(((-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)))
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Smaller positive root, else the sole positive one. The epsilon
        // applies to the chosen root only.
        let t = match roots(self, ray)? {
            (near, _) if near > 0.0 => near,
            (_, far) if far > 0.0 => far,
            _ => return None,
        };
        HIT_RANGE.surrounds(t).then_some(t)
    }

    fn surface_normal(&self, point: Point, _ray: &Ray) -> Vector {
        (point - self.center).scaled(1.0 / self.radius).normalized()
    }
}
