//! Glint math - points, vectors, rays and the pinhole camera.
//!
//! Thin strongly-typed layer over `glam`.

// Re-export glam for convenience
pub use glam::*;

mod camera;
mod interval;
mod ray;
mod vector;

pub use camera::Camera;
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{Point, Vector};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_vector_roundtrip_through_glam() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Point::from(v).as_vec3(), v);
        assert_eq!(Vector::from(v).as_vec3(), v);
    }

    #[test]
    fn test_point_to_vector() {
        let p = Point::new(0.0, 3.0, 4.0);
        let v = p.to_vector();
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(Point::ORIGIN + v, p);
    }
}
