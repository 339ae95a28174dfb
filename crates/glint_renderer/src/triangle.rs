//! Triangle intersection.
//!
//! Solves `A + β(B - A) + γ(C - A) = start + t·direction` for `(t, β, γ)`
//! with Cramer's rule.

use glint_core::Triangle;
use glint_math::{Interval, Point, Ray, Vector};

use crate::hittable::{Surface, HIT_RANGE};

impl Surface for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let (vertex_a, _, _) = self.vertices();
        let (ab, ac) = self.edges();
        let to_a = vertex_a - ray.start;

        let (a, b, c) = (ab.x(), ab.y(), ab.z());
        let (d, e, f) = (ac.x(), ac.y(), ac.z());
        let (g, h, i) = (ray.direction.x(), ray.direction.y(), ray.direction.z());
        let (j, k, l) = (to_a.x(), to_a.y(), to_a.z());

        let ei_hf = e * i - h * f;
        let gf_di = g * f - d * i;
        let dh_eg = d * h - e * g;

        let m = a * ei_hf + b * gf_di + c * dh_eg;
        if m == 0.0 {
            return None;
        }

        let ak_jb = a * k - j * b;
        let jc_al = j * c - a * l;
        let bl_kc = b * l - k * c;

        let t = -(f * ak_jb + e * jc_al + d * bl_kc) / m;
        if !HIT_RANGE.surrounds(t) {
            return None;
        }

        let gamma = (i * ak_jb + h * jc_al + g * bl_kc) / m;
        if !Interval::UNIT.surrounds(gamma) {
            return None;
        }

        let beta = (j * ei_hf + k * gf_di + l * dh_eg) / m;
        if !Interval::UNIT.surrounds(beta) || beta + gamma >= 1.0 {
            return None;
        }

        Some(t)
    }

    /// Face normal, flipped to face back along the incoming ray.
    fn surface_normal(&self, _point: Point, ray: &Ray) -> Vector {
        let (ab, ac) = self.edges();
        let normal = ab.cross(ac).normalized();
        if normal.dot(ray.direction) > 0.0 {
            -normal
        } else {
            normal
        }
    }
}
