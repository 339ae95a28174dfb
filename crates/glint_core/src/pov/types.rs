//! Raw POV declarations as they appear in the file.
//!
//! These carry unvalidated values plus the source line, so that the loader
//! can report invariant violations against the declaration that caused them.

use glint_math::{Camera, Vec3};

use crate::color::{Finish, Pigment};

/// A top-level block from a POV file.
#[derive(Debug, Clone, PartialEq)]
pub enum PovBlock {
    Camera(PovCamera),
    LightSource(PovLight),
    Sphere(PovSphere),
    Plane(PovPlane),
    Triangle(PovTriangle),
    /// A block type the parser does not understand (skipped).
    Unknown(String),
}

/// `camera { location <..> up <..> right <..> look_at <..> }`
#[derive(Debug, Clone, PartialEq)]
pub struct PovCamera {
    pub line: usize,
    pub location: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub look_at: Vec3,
}

impl PovCamera {
    /// Camera declaration with every key at its default.
    pub fn at_line(line: usize) -> Self {
        let defaults = Camera::default();
        Self {
            line,
            location: defaults.center.as_vec3(),
            up: defaults.up.as_vec3(),
            right: defaults.right.as_vec3(),
            look_at: defaults.lookat.as_vec3(),
        }
    }
}

/// `light_source { <x, y, z> color rgb <..> }`
#[derive(Debug, Clone, PartialEq)]
pub struct PovLight {
    pub line: usize,
    pub center: Vec3,
    pub color: Pigment,
}

/// Object modifiers shared by every shape block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PovSurface {
    pub pigment: Pigment,
    pub finish: Finish,
}

/// `sphere { <center>, radius ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct PovSphere {
    pub line: usize,
    pub center: Vec3,
    pub radius: f32,
    pub surface: PovSurface,
}

/// `plane { <normal>, distance ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct PovPlane {
    pub line: usize,
    pub normal: Vec3,
    pub distance: f32,
    pub surface: PovSurface,
}

/// `triangle { <a>, <b>, <c> ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct PovTriangle {
    pub line: usize,
    pub vertices: [Vec3; 3],
    pub surface: PovSurface,
}
