use std::fmt;

use crate::{Point, Vector};

/// Pinhole camera described the POV-Ray way.
///
/// The view plane sits one unit in front of `center`, facing `lookat`; its
/// extent is `|right|` wide and `|up|` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: Point,
    pub lookat: Point,
    pub up: Vector,
    pub right: Vector,
}

impl Camera {
    /// Create a new camera
    pub fn new(center: Point, up: Vector, right: Vector, lookat: Point) -> Self {
        Self {
            center,
            lookat,
            up,
            right,
        }
    }

    /// Orthonormal view basis `(u, v, w)`.
    ///
    /// `w` points from the look-at point back towards the eye, `u` along `right`
    /// and `v = w × u`.
    pub fn basis(&self) -> (Vector, Vector, Vector) {
        let w = (self.center - self.lookat).normalized();
        let u = self.right.normalized();
        let v = w.cross(u);
        (u, v, w)
    }

    /// Width and height of the view plane.
    pub fn view_extent(&self) -> (f32, f32) {
        (self.right.magnitude(), self.up.magnitude())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            lookat: Point::new(0.0, 0.0, -1.0),
            up: Vector::new(0.0, 1.0, 0.0),
            right: Vector::new(1.333_333_4, 0.0, 0.0),
        }
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "camera {{")?;
        writeln!(f, "  location   {}", self.center)?;
        writeln!(f, "  up         {}", self.up)?;
        writeln!(f, "  right      {}", self.right)?;
        writeln!(f, "  look_at    {}", self.lookat)?;
        write!(f, "}}")
    }
}
