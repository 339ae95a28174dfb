//! Recursive mirror reflection.
//!
//! Every primary hit is shaded locally and, on reflective surfaces, blended
//! with the color seen along the mirror direction. Recursion stops at
//! [`MAX_BOUNCE_DEPTH`], so one primary ray costs at most
//! `MAX_BOUNCE_DEPTH + 1` evaluations.

use std::ops::AddAssign;

use glint_core::{Object, Pigment, Scene};
use glint_math::Ray;

use crate::hittable::closest_hit;
use crate::shading::local_shade;

/// Deepest bounce that is still evaluated; reflection stops there.
pub const MAX_BOUNCE_DEPTH: u32 = 4;

/// Counters gathered while tracing, merged across pixels for the render summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Primary rays traced.
    pub primary_rays: u64,
    /// Reflection evaluations (one per shaded hit).
    pub evaluations: u64,
    /// Deepest bounce depth reached.
    pub deepest_bounce: u32,
    /// Shadow feelers cast.
    pub shadow_feelers: u64,
}

impl AddAssign for TraceStats {
    fn add_assign(&mut self, rhs: TraceStats) {
        self.primary_rays += rhs.primary_rays;
        self.evaluations += rhs.evaluations;
        self.deepest_bounce = self.deepest_bounce.max(rhs.deepest_bounce);
        self.shadow_feelers += rhs.shadow_feelers;
    }
}

/// Color of the hit of `incident` on `object` at `distance`, at bounce `depth`.
pub fn reflect(
    scene: &Scene,
    object: &Object,
    distance: f32,
    incident: &Ray,
    depth: u32,
    stats: &mut TraceStats,
) -> Pigment {
    stats.evaluations += 1;
    stats.deepest_bounce = stats.deepest_bounce.max(depth);

    let shade = local_shade(scene, object, incident, distance, stats);
    let finish = &object.finish;

    if depth >= MAX_BOUNCE_DEPTH || !finish.is_reflective() {
        return shade.local();
    }

    let bounced = Ray::reflected(incident, shade.point, shade.normal);
    let local = shade.ambient + (shade.diffuse + shade.specular) * (1.0 - finish.reflect);

    match closest_hit(scene.objects(), &bounced) {
        Some(hit) => {
            let mirrored = reflect(scene, hit.object, hit.distance, &bounced, depth + 1, stats);
            local + mirrored * finish.reflect
        }
        None => local,
    }
}

/// Color seen along a primary ray; `background` when nothing is hit.
pub fn trace(scene: &Scene, ray: &Ray, background: Pigment, stats: &mut TraceStats) -> Pigment {
    stats.primary_rays += 1;

    match closest_hit(scene.objects(), ray) {
        Some(hit) => reflect(scene, hit.object, hit.distance, ray, 0, stats),
        None => background,
    }
}
