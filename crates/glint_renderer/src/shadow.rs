//! Shadow feelers.

use glint_core::Scene;
use glint_math::{Point, Ray};

use crate::hittable::{Surface, HIT_RANGE};
use crate::trace::TraceStats;

/// Whether the scene light reaches `point`.
///
/// Casts a feeler toward the light center and tests it against every object.
/// Only hits strictly between the point and the light occlude it.
pub fn is_lit(scene: &Scene, point: Point, stats: &mut TraceStats) -> bool {
    stats.shadow_feelers += 1;

    let to_light = scene.light.center - point;
    let feeler = Ray::new(point, to_light);
    let window = HIT_RANGE.with_max(to_light.magnitude());

    !scene.objects().iter().any(|object| {
        object
            .shape
            .intersect(&feeler)
            .map_or(false, |distance| window.surrounds(distance))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Finish, Light, Object, Pigment, Plane, Sphere};
    use glint_math::{Camera, Vector};

    fn scene_with_light_at(y: f32) -> Scene {
        Scene::new(
            Camera::default(),
            Light::new(Point::new(0.0, y, 0.0), Pigment::WHITE),
        )
        .with_object(Object::new(
            Plane::new(Vector::new(0.0, 1.0, 0.0), -1.0).unwrap(),
            Pigment::WHITE,
            Finish::default(),
        ))
    }

    #[test]
    fn test_unoccluded_point_is_lit() {
        let scene = scene_with_light_at(10.0);
        let mut stats = TraceStats::default();

        assert!(is_lit(&scene, Point::new(0.0, -1.0, 0.0), &mut stats));
        assert_eq!(stats.shadow_feelers, 1);
    }

    #[test]
    fn test_blocker_between_point_and_light() {
        let scene = scene_with_light_at(10.0).with_object(Object::new(
            Sphere::new(Point::new(0.0, 3.0, 0.0), 1.0).unwrap(),
            Pigment::WHITE,
            Finish::default(),
        ));
        let mut stats = TraceStats::default();

        assert!(!is_lit(&scene, Point::new(0.0, -1.0, 0.0), &mut stats));
        // Off to the side the sphere no longer blocks.
        assert!(is_lit(&scene, Point::new(8.0, -1.0, 0.0), &mut stats));
        assert_eq!(stats.shadow_feelers, 2);
    }

    #[test]
    fn test_object_beyond_light_does_not_occlude() {
        let scene = scene_with_light_at(2.0).with_object(Object::new(
            Sphere::new(Point::new(0.0, 6.0, 0.0), 1.0).unwrap(),
            Pigment::WHITE,
            Finish::default(),
        ));
        let mut stats = TraceStats::default();

        assert!(is_lit(&scene, Point::new(0.0, -1.0, 0.0), &mut stats));
    }

    #[test]
    fn test_light_below_floor_is_occluded() {
        let scene = scene_with_light_at(-5.0);
        let mut stats = TraceStats::default();

        assert!(!is_lit(&scene, Point::new(0.0, 2.0, 0.0), &mut stats));
    }
}
