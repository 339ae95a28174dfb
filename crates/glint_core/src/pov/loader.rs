//! High-level POV scene loading.
//!
//! Turns parsed blocks into a validated [`Scene`]. Shape invariants are
//! enforced here through the shape constructors; a violation is reported
//! against the line of the offending declaration.

use std::path::Path;

use glint_math::{Camera, Point, Vector};
use thiserror::Error;

use super::parser::{parse_pov, ParseError};
use super::types::{PovBlock, PovCamera, PovLight, PovSurface};
use crate::scene::{Light, Scene};
use crate::shape::{Object, Plane, Shape, ShapeError, Sphere, Triangle};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Scene has no camera")]
    MissingCamera,

    #[error("Scene has no light_source")]
    MissingLight,

    #[error("Invalid declaration at line {line}: {message}")]
    Invalid { line: usize, message: String },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a POV scene file.
///
/// # Example
///
/// ```ignore
/// use glint_core::pov::load_pov;
///
/// let scene = load_pov("scenes/simple_reflect.pov")?;
/// println!("Loaded {} objects", scene.len());
/// ```
pub fn load_pov<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    load_pov_from_string(&content)
}

/// Load a scene from POV source text.
pub fn load_pov_from_string(content: &str) -> LoadResult<Scene> {
    let blocks = parse_pov(content)?;

    let mut camera: Option<PovCamera> = None;
    let mut light: Option<PovLight> = None;
    let mut objects = Vec::new();
    let mut skipped = 0;

    for block in blocks {
        match block {
            PovBlock::Camera(decl) => {
                if let Some(previous) = camera.replace(decl) {
                    log::warn!(
                        "Camera declared again; replacing the one from line {}",
                        previous.line
                    );
                }
            }
            PovBlock::LightSource(decl) => {
                if let Some(previous) = light.replace(decl) {
                    log::warn!(
                        "Only one light is supported; replacing the one from line {}",
                        previous.line
                    );
                }
            }
            PovBlock::Sphere(decl) => {
                let sphere = Sphere::new(Point::from(decl.center), decl.radius)
                    .map_err(|e| invalid(decl.line, e))?;
                objects.push(build_object(sphere, decl.surface, decl.line)?);
            }
            PovBlock::Plane(decl) => {
                let plane = Plane::new(Vector::from(decl.normal), decl.distance)
                    .map_err(|e| invalid(decl.line, e))?;
                objects.push(build_object(plane, decl.surface, decl.line)?);
            }
            PovBlock::Triangle(decl) => {
                let [a, b, c] = decl.vertices.map(Point::from);
                let triangle = Triangle::new(a, b, c).map_err(|e| invalid(decl.line, e))?;
                objects.push(build_object(triangle, decl.surface, decl.line)?);
            }
            PovBlock::Unknown(_) => skipped += 1,
        }
    }

    let camera = camera.ok_or(LoadError::MissingCamera)?;
    let light = light.ok_or(LoadError::MissingLight)?;

    let mut scene = Scene::new(convert_camera(&camera), convert_light(&light));
    for object in objects {
        scene.add(object);
    }

    log::info!(
        "Loaded scene: {} objects ({} unsupported blocks skipped)",
        scene.len(),
        skipped
    );
    log::debug!("Scene:\n{}", scene);

    Ok(scene)
}

fn convert_camera(decl: &PovCamera) -> Camera {
    Camera::new(
        Point::from(decl.location),
        Vector::from(decl.up),
        Vector::from(decl.right),
        Point::from(decl.look_at),
    )
}

fn convert_light(decl: &PovLight) -> Light {
    Light::new(Point::from(decl.center), decl.color)
}

fn build_object(shape: impl Into<Shape>, surface: PovSurface, line: usize) -> LoadResult<Object> {
    if !(surface.finish.roughness > 0.0) {
        return Err(LoadError::Invalid {
            line,
            message: format!(
                "finish roughness must be positive, got {}",
                surface.finish.roughness
            ),
        });
    }
    Ok(Object::new(shape, surface.pigment, surface.finish))
}

fn invalid(line: usize, error: ShapeError) -> LoadError {
    LoadError::Invalid {
        line,
        message: error.to_string(),
    }
}
