//! Surface trait and closest-hit search for ray-object intersection.

use glint_core::{Object, Shape};
use glint_math::{Interval, Point, Ray, Vector};

/// Minimum accepted hit distance.
pub const HIT_EPSILON: f32 = 0.001;

/// Window of accepted hit distances for unbounded rays.
pub const HIT_RANGE: Interval = Interval::new(HIT_EPSILON, f32::INFINITY);

/// Geometry that rays can hit.
pub trait Surface: Send + Sync {
    /// Distance along `ray` to the hit, or `None` when the ray misses.
    ///
    /// A returned distance is always greater than [`HIT_EPSILON`].
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Unit normal at a point on the surface hit by `ray`.
    fn surface_normal(&self, point: Point, ray: &Ray) -> Vector;
}

impl Surface for Shape {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray),
        }
    }

    fn surface_normal(&self, point: Point, ray: &Ray) -> Vector {
        match self {
            Shape::Sphere(sphere) => sphere.surface_normal(point, ray),
            Shape::Plane(plane) => plane.surface_normal(point, ray),
            Shape::Triangle(triangle) => triangle.surface_normal(point, ray),
        }
    }
}

/// The nearest object along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub object: &'a Object,
    pub distance: f32,
}

/// Find the closest object hit by `ray`.
///
/// On equal distances the object declared first wins.
pub fn closest_hit<'a>(objects: &'a [Object], ray: &Ray) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;

    for object in objects {
        if let Some(distance) = object.shape.intersect(ray) {
            let closest_so_far = closest.map_or(f32::INFINITY, |hit| hit.distance);
            if distance < closest_so_far {
                closest = Some(Hit { object, distance });
            }
        }
    }

    closest
}
