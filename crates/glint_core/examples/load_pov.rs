//! Example: Load and inspect a POV scene file.
//!
//! Run with: cargo run --example load_pov -- scenes/simple_reflect.pov

use std::env;

use glint_core::pov::load_pov;
use glint_core::Shape;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_pov <path-to-pov-file>");
        println!("\nExamples:");
        println!("  cargo run --example load_pov -- scenes/red_sphere.pov");
        println!("  cargo run --example load_pov -- scenes/simple_reflect.pov");
        println!("  cargo run --example load_pov -- scenes/mirrors.pov");
        return;
    }

    let path = &args[1];
    println!("Loading POV file: {}", path);

    match load_pov(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} objects ===", scene.len());
            println!("Camera: {} looking at {}", scene.camera.center, scene.camera.lookat);
            println!("Light: {} ({})", scene.light.center, scene.light.pigment);

            println!("\n--- Objects ---");
            for (i, object) in scene.objects().iter().enumerate() {
                let detail = match &object.shape {
                    Shape::Sphere(s) => format!("center {} radius {:.2}", s.center, s.radius),
                    Shape::Plane(p) => format!("normal {} distance {:.2}", p.normal(), p.distance()),
                    Shape::Triangle(t) => {
                        let (a, b, c) = t.vertices();
                        format!("{} {} {}", a, b, c)
                    }
                };
                println!("  [{}] {} - {}", i, object.shape.kind(), detail);
                println!(
                    "       reflect {:.2}, ambient {:.2}, diffuse {:.2}, specular {:.2}",
                    object.finish.reflect,
                    object.finish.ambient,
                    object.finish.diffuse,
                    object.finish.specular
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading POV file: {}", e);
        }
    }
}
