//! Point and vector primitives.
//!
//! `Point` is a location and `Vector` a direction or offset. Keeping them apart
//! lets the type checker catch "added two positions" mistakes; the arithmetic
//! itself is delegated to `glam`.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::Vec3;

/// A location in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(Vec3);

impl Point {
    /// The world origin.
    pub const ORIGIN: Point = Point(Vec3::ZERO);

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.0.z
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f32 {
        self.0.distance(other.0)
    }

    /// The offset from the origin to this point.
    #[inline]
    pub fn to_vector(self) -> Vector {
        Vector::from_vec3(self.0)
    }

    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        self.0
    }
}

impl From<Vec3> for Point {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl Sub for Point {
    type Output = Vector;

    /// The vector leading from `rhs` to `self`.
    fn sub(self, rhs: Point) -> Vector {
        Vector::from_vec3(self.0 - rhs.0)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point(self.0 + rhs.xyz)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.0.x, self.0.y, self.0.z)
    }
}

/// A direction or offset with a cached magnitude.
///
/// The magnitude always equals the Euclidean length of the components; it is
/// refreshed by every operation that changes them and pinned to exactly `1.0`
/// after a successful [`Vector::normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    xyz: Vec3,
    magnitude: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector {
        xyz: Vec3::ZERO,
        magnitude: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_vec3(Vec3::new(x, y, z))
    }

    pub fn from_vec3(xyz: Vec3) -> Self {
        Self {
            xyz,
            magnitude: xyz.length(),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.xyz.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.xyz.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.xyz.z
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        self.xyz
    }

    #[inline]
    pub fn dot(&self, other: Vector) -> f32 {
        self.xyz.dot(other.xyz)
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, other: Vector) -> Vector {
        Vector::from_vec3(self.xyz.cross(other.xyz))
    }

    /// True when the vector has no usable direction.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.magnitude > 0.0)
    }

    /// Scale to unit length in place.
    ///
    /// A zero (or non-finite) vector cannot be normalized: it is left untouched
    /// and a warning is logged, so any shading term built on it degrades to zero
    /// instead of turning into NaN.
    pub fn normalize(&mut self) {
        if self.is_degenerate() {
            log::warn!("cannot normalize degenerate vector {}", self);
            return;
        }
        self.xyz /= self.magnitude;
        self.magnitude = 1.0;
    }

    /// Consuming form of [`Vector::normalize`].
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Multiply every component by `factor`, refreshing the magnitude.
    pub fn scale(&mut self, factor: f32) {
        self.xyz *= factor;
        self.magnitude = self.xyz.length();
    }

    #[inline]
    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale(factor);
        self
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Self::from_vec3(v)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::from_vec3(self.xyz + rhs.xyz)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::from_vec3(self.xyz - rhs.xyz)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            xyz: -self.xyz,
            magnitude: self.magnitude,
        }
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        self.scaled(rhs)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scaled(self)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.xyz.x, self.xyz.y, self.xyz.z)
    }
}
