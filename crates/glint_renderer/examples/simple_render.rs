//! Simple ray tracer example.
//!
//! Renders a row of spheres over a mirror floor and saves to PPM format.

use glint_core::{Finish, Light, Object, Pigment, Plane, Scene, Sphere};
use glint_math::Camera;
use glint_renderer::{color_to_rgb, render_buckets, ImageBuffer, Point, RenderConfig, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?} ({} objects)", start.elapsed(), scene.len());

    let config = RenderConfig::default().with_resolution(800, 450);

    println!("Rendering {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = render_buckets(&scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let camera = Camera::new(
        Point::new(0.0, 2.0, 12.0),
        Vector::new(0.0, 1.0, 0.0),
        Vector::new(16.0 / 9.0, 0.0, 0.0),
        Point::new(0.0, 0.5, 0.0),
    );
    let mut scene = Scene::new(
        camera,
        Light::new(Point::new(-20.0, 30.0, 20.0), Pigment::rgb(1.2, 1.2, 1.2)),
    );

    // Mirror floor
    scene.add(Object::new(
        Plane::new(Vector::new(0.0, 1.0, 0.0), -1.0).expect("valid normal"),
        Pigment::rgb(0.5, 0.5, 0.5),
        Finish {
            ambient: 0.1,
            diffuse: 0.6,
            reflect: 0.4,
            ..Default::default()
        },
    ));

    // Row of spheres with random colors
    let mut rng = StdRng::seed_from_u64(7);
    for i in -3..=3 {
        let pigment = Pigment::rgb(rng.gen(), rng.gen(), rng.gen());
        let finish = Finish {
            ambient: 0.15,
            diffuse: 0.7,
            specular: 0.5,
            roughness: 0.02,
            reflect: if i % 2 == 0 { 0.3 } else { 0.0 },
            ..Default::default()
        };
        let sphere = Sphere::new(Point::new(i as f32 * 1.6, 0.0, 0.0), 0.7).expect("valid radius");
        scene.add(Object::new(sphere, pigment, finish));
    }

    scene
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    // PPM rows run top to bottom
    for y in (0..image.height).rev() {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
