//! Color model: pigments and surface finishes.

use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// Linear RGB color plus a filter channel.
///
/// Channels are nominally in `[0, 1]` but may exceed that while shading terms
/// are accumulated; clamping happens only when converting to display values.
/// The filter `f` is parsed and carried along but never blended.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pigment {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub f: f32,
}

impl Pigment {
    pub const BLACK: Pigment = Pigment::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Pigment = Pigment::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, f: 0.0 }
    }

    pub const fn rgbf(r: f32, g: f32, b: f32, f: f32) -> Self {
        Self { r, g, b, f }
    }

    /// Each color channel limited to at most `max`.
    pub fn capped(&self, max: f32) -> Self {
        Self {
            r: self.r.min(max),
            g: self.g.min(max),
            b: self.b.min(max),
            f: self.f,
        }
    }

    /// Largest of the three color channels.
    pub fn max_channel(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }
}

impl Add for Pigment {
    type Output = Pigment;

    fn add(self, rhs: Pigment) -> Pigment {
        Pigment::rgbf(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.f)
    }
}

impl AddAssign for Pigment {
    fn add_assign(&mut self, rhs: Pigment) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Mul<f32> for Pigment {
    type Output = Pigment;

    fn mul(self, rhs: f32) -> Pigment {
        Pigment::rgbf(self.r * rhs, self.g * rhs, self.b * rhs, self.f)
    }
}

/// Channel-wise product, used to filter a surface color by the light color.
impl Mul for Pigment {
    type Output = Pigment;

    fn mul(self, rhs: Pigment) -> Pigment {
        Pigment::rgbf(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.f)
    }
}

impl fmt::Display for Pigment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color rgbf <{}, {}, {}, {}>", self.r, self.g, self.b, self.f)
    }
}

/// BRDF coefficients of a surface.
///
/// `refract` and `ior` are accepted from scene files but no refraction model
/// consumes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finish {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    /// Specular exponent is `1 / roughness`; must be positive.
    pub roughness: f32,
    pub reflect: f32,
    pub refract: f32,
    pub ior: f32,
}

impl Default for Finish {
    fn default() -> Self {
        Self {
            ambient: 0.0,
            diffuse: 0.0,
            specular: 0.0,
            roughness: 1.0,
            reflect: 0.0,
            refract: 0.0,
            ior: 0.0,
        }
    }
}

impl Finish {
    /// Whether hits on this surface spawn a reflected ray.
    pub fn is_reflective(&self) -> bool {
        self.reflect != 0.0
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "finish {{ambient {} diffuse {} specular {} roughness {}",
            self.ambient, self.diffuse, self.specular, self.roughness
        )?;
        if self.reflect != 0.0 {
            write!(f, " reflection {}", self.reflect)?;
        }
        if self.refract != 0.0 {
            write!(f, " refraction {}", self.refract)?;
        }
        if self.ior != 0.0 {
            write!(f, " ior {}", self.ior)?;
        }
        write!(f, "}}")
    }
}
