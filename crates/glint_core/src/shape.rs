//! Primitive shapes and the scene objects built from them.
//!
//! Shapes here are plain validated data. Intersection and shading live in
//! `glint_renderer`.

use std::fmt;

use glint_math::{Point, Vector};
use thiserror::Error;

use crate::color::{Finish, Pigment};

/// Invariant violations caught when a shape is constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("plane normal has zero length")]
    ZeroNormal,

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,
}

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point, radius: f32) -> Result<Self, ShapeError> {
        if !(radius > 0.0) {
            return Err(ShapeError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }
}

/// An infinite plane: every point `P` with `dot(normal, P) == distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector,
    distance: f32,
}

impl Plane {
    /// Create a plane; the normal is normalized here.
    pub fn new(normal: Vector, distance: f32) -> Result<Self, ShapeError> {
        if normal.is_degenerate() {
            return Err(ShapeError::ZeroNormal);
        }
        Ok(Self {
            normal: normal.normalized(),
            distance,
        })
    }

    /// Unit normal.
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Offset of the plane along its normal.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The point of the plane closest to the origin.
    pub fn anchor(&self) -> Point {
        Point::ORIGIN + self.normal * self.distance
    }
}

/// A triangle with cached edge vectors.
///
/// Edges run from the other vertices towards `a`: `ab = a - b`, `ac = a - c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
    ab: Vector,
    ac: Vector,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self, ShapeError> {
        let ab = a - b;
        let ac = a - c;
        if ab.cross(ac).is_degenerate() {
            return Err(ShapeError::DegenerateTriangle);
        }
        Ok(Self { a, b, c, ab, ac })
    }

    pub fn vertices(&self) -> (Point, Point, Point) {
        (self.a, self.b, self.c)
    }

    pub fn edges(&self) -> (Vector, Vector) {
        (self.ab, self.ac)
    }
}

/// The closed set of primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Shape {
    /// Lower-case kind name, as used in scene files.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::Triangle(_) => "triangle",
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

/// A renderable primitive: shape plus surface appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object {
    pub shape: Shape,
    pub pigment: Pigment,
    pub finish: Finish,
}

impl Object {
    pub fn new(shape: impl Into<Shape>, pigment: Pigment, finish: Finish) -> Self {
        Self {
            shape: shape.into(),
            pigment,
            finish,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            Shape::Sphere(s) => writeln!(f, "sphere {{ {}, {}", s.center, s.radius)?,
            Shape::Plane(p) => writeln!(f, "plane {{ {}, {}", p.normal, p.distance)?,
            Shape::Triangle(t) => writeln!(f, "triangle {{ {} {} {}", t.a, t.b, t.c)?,
        }
        writeln!(f, "  pigment {{ {} }}", self.pigment)?;
        writeln!(f, "  {}", self.finish)?;
        write!(f, "}}")
    }
}
