//! Glint Core - scene description types and POV scene loading.
//!
//! This crate provides:
//!
//! - **Color model**: `Pigment`, `Finish`
//! - **Scene types**: `Scene`, `Light`, `Object`, `Shape`
//! - **POV support**: parsing a POV-Ray scene subset into a `Scene`
//!
//! # Example
//!
//! ```ignore
//! use glint_core::pov::load_pov;
//!
//! let scene = load_pov("scenes/simple_reflect.pov")?;
//! println!("Loaded {} objects", scene.len());
//! ```

pub mod color;
pub mod pov;
pub mod scene;
pub mod shape;

// Re-export commonly used types
pub use color::{Finish, Pigment};
pub use pov::{load_pov, load_pov_from_string, LoadError};
pub use scene::{Light, Scene};
pub use shape::{Object, Plane, Shape, ShapeError, Sphere, Triangle};
