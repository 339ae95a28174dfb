//! POV-Ray scene support for Glint.
//!
//! This module parses a small subset of the POV-Ray scene language and
//! converts it into a [`Scene`](crate::scene::Scene).
//!
//! ## Supported Blocks
//!
//! - `camera`: location, up, right, look_at
//! - `light_source`: a single point light
//! - `sphere`, `plane`, `triangle` with `pigment` and `finish` modifiers
//!
//! ## Not Supported
//!
//! - Transforms (`translate`, `rotate`, `scale`) are skipped
//! - CSG, boxes, meshes and other primitives are skipped with a warning
//! - `#declare`, `#include` and other directives
//! - Block comments
//!
//! # Example
//!
//! ```ignore
//! use glint_core::pov::load_pov;
//!
//! let scene = load_pov("scenes/simple_reflect.pov")?;
//! println!("Loaded {} objects", scene.len());
//! ```

mod loader;
mod parser;
mod types;

pub use loader::*;
pub use parser::*;
pub use types::*;
