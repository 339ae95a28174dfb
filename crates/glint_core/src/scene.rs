//! Scene context: camera, light and the primitive list.
//!
//! A `Scene` is assembled once at load time and then shared read-only by every
//! pixel evaluation. Objects can be appended while building but never removed.

use std::fmt;

use glint_math::{Camera, Point};

use crate::color::Pigment;
use crate::shape::Object;

/// A point light with no distance attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub center: Point,
    pub pigment: Pigment,
}

impl Light {
    pub fn new(center: Point, pigment: Pigment) -> Self {
        Self { center, pigment }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "light_source {{ {} {} }}", self.center, self.pigment)
    }
}

/// Everything a render needs to know about the world.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub light: Light,
    objects: Vec<Object>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera, light: Light) -> Self {
        Self {
            camera,
            light,
            objects: Vec::new(),
        }
    }

    /// Append an object and return its index.
    pub fn add(&mut self, object: Object) -> usize {
        let id = self.objects.len();
        self.objects.push(object);
        id
    }

    /// Builder form of [`Scene::add`].
    pub fn with_object(mut self, object: Object) -> Self {
        self.add(object);
        self
    }

    /// All objects in declaration order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.camera)?;
        writeln!(f, "{}", self.light)?;
        for object in &self.objects {
            writeln!(f, "{}", object)?;
        }
        Ok(())
    }
}
