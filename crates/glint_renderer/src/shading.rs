//! Blinn-Phong local illumination.

use glint_core::{Object, Pigment, Scene};
use glint_math::{Point, Ray, Vector};

use crate::hittable::Surface;
use crate::shadow::is_lit;
use crate::trace::TraceStats;

/// Local shading terms at one hit.
///
/// Terms are unclamped; they are combined by the reflection step and only
/// clamped when converted to display values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub point: Point,
    pub normal: Vector,
    pub ambient: Pigment,
    pub diffuse: Pigment,
    pub specular: Pigment,
}

impl Shade {
    /// Ambient + diffuse + specular.
    pub fn local(&self) -> Pigment {
        self.ambient + self.diffuse + self.specular
    }
}

/// Shade the hit of `ray` on `object` at `distance`.
///
/// Ambient is always present. Diffuse and specular require the light to be
/// visible from the hit point.
pub fn local_shade(
    scene: &Scene,
    object: &Object,
    ray: &Ray,
    distance: f32,
    stats: &mut TraceStats,
) -> Shade {
    let point = ray.at(distance);
    let normal = object.shape.surface_normal(point, ray);
    let finish = &object.finish;
    let light = &scene.light;

    let mut shade = Shade {
        point,
        normal,
        ambient: object.pigment * light.pigment.capped(1.0) * finish.ambient,
        diffuse: Pigment::BLACK,
        specular: Pigment::BLACK,
    };

    if !is_lit(scene, point, stats) {
        return shade;
    }

    let lit = object.pigment * light.pigment;
    let to_light = (light.center - point).normalized();

    let lambert = normal.dot(to_light).max(0.0);
    shade.diffuse = lit * (finish.diffuse * lambert * (1.0 - finish.reflect));

    let to_camera = (scene.camera.center - point).normalized();
    let half = (to_light + to_camera).normalized();
    let highlight = normal.dot(half).max(0.0).powf(1.0 / finish.roughness);
    shade.specular = lit * (finish.specular * highlight);

    shade
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Finish, Light, Sphere};
    use glint_math::Camera;

    const TOLERANCE: f32 = 1e-5;

    fn assert_pigment_eq(actual: Pigment, expected: Pigment) {
        assert!(
            (actual.r - expected.r).abs() < TOLERANCE
                && (actual.g - expected.g).abs() < TOLERANCE
                && (actual.b - expected.b).abs() < TOLERANCE,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    /// Camera and light both on the +z axis, sphere of radius 1 at z = -5.
    fn head_on_scene(finish: Finish, light: Pigment) -> (Scene, Ray) {
        let camera = Camera::new(
            Point::ORIGIN,
            Vector::new(0.0, 1.0, 0.0),
            Vector::new(1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, -1.0),
        );
        let scene = Scene::new(camera, Light::new(Point::new(0.0, 0.0, 10.0), light))
            .with_object(Object::new(
                Sphere::new(Point::new(0.0, 0.0, -5.0), 1.0).unwrap(),
                Pigment::rgb(1.0, 0.5, 0.25),
                finish,
            ));
        let ray = Ray::new(Point::ORIGIN, Vector::new(0.0, 0.0, -1.0));
        (scene, ray)
    }

    #[test]
    fn test_head_on_terms() {
        let finish = Finish {
            ambient: 0.1,
            diffuse: 0.6,
            specular: 0.3,
            roughness: 0.05,
            ..Default::default()
        };
        let (scene, ray) = head_on_scene(finish, Pigment::WHITE);
        let mut stats = TraceStats::default();

        let shade = local_shade(&scene, &scene.objects()[0], &ray, 4.0, &mut stats);

        assert!((shade.point.z() + 4.0).abs() < TOLERANCE);
        assert!((shade.normal.z() - 1.0).abs() < TOLERANCE);
        assert_pigment_eq(shade.ambient, Pigment::rgb(0.1, 0.05, 0.025));
        // Normal, light and view directions coincide: full diffuse and specular.
        assert_pigment_eq(shade.diffuse, Pigment::rgb(0.6, 0.3, 0.15));
        assert_pigment_eq(shade.specular, Pigment::rgb(0.3, 0.15, 0.075));
        assert_pigment_eq(shade.local(), Pigment::rgb(1.0, 0.5, 0.25));
        assert_eq!(stats.shadow_feelers, 1);
    }

    #[test]
    fn test_ambient_uses_capped_light() {
        let finish = Finish {
            ambient: 0.5,
            ..Default::default()
        };
        let (scene, ray) = head_on_scene(finish, Pigment::rgb(1.5, 0.5, 2.0));
        let mut stats = TraceStats::default();

        let shade = local_shade(&scene, &scene.objects()[0], &ray, 4.0, &mut stats);
        assert_pigment_eq(shade.ambient, Pigment::rgb(0.5, 0.125, 0.125));
    }

    #[test]
    fn test_diffuse_attenuated_by_reflect() {
        let finish = Finish {
            diffuse: 1.0,
            reflect: 0.25,
            ..Default::default()
        };
        let (scene, ray) = head_on_scene(finish, Pigment::WHITE);
        let mut stats = TraceStats::default();

        let shade = local_shade(&scene, &scene.objects()[0], &ray, 4.0, &mut stats);
        assert_pigment_eq(shade.diffuse, Pigment::rgb(0.75, 0.375, 0.1875));
    }

    #[test]
    fn test_shadowed_hit_is_ambient_only() {
        let finish = Finish {
            ambient: 0.2,
            diffuse: 0.8,
            specular: 0.5,
            ..Default::default()
        };
        let (scene, ray) = head_on_scene(finish, Pigment::WHITE);
        // Light moved behind the sphere: the hit point faces away from it.
        let scene = Scene::new(
            scene.camera,
            Light::new(Point::new(0.0, 0.0, -20.0), Pigment::WHITE),
        )
        .with_object(scene.objects()[0]);
        let mut stats = TraceStats::default();

        let shade = local_shade(&scene, &scene.objects()[0], &ray, 4.0, &mut stats);
        assert_pigment_eq(shade.ambient, Pigment::rgb(0.2, 0.1, 0.05));
        assert_eq!(shade.diffuse, Pigment::BLACK);
        assert_eq!(shade.specular, Pigment::BLACK);
    }
}
