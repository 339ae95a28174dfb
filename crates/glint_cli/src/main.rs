//! `glint <width> <height> <scene-file>`
//!
//! Loads a POV scene, renders it and writes `<scene-stem>.tga`.

mod cli;
mod output;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::load_pov;
use glint_renderer::{render_buckets, RenderConfig};

use cli::Args;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let scene = load_pov(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let config = RenderConfig::default().with_resolution(args.width, args.height);
    log::info!(
        "Rendering {}x{} with {} objects",
        config.width,
        config.height,
        scene.len()
    );

    let start = Instant::now();
    let image = render_buckets(&scene, &config);
    log::info!("Rendered in {:.2?}", start.elapsed());

    let output = args.output_path();
    output::save_tga(&image, &output)?;
    log::info!("Saved {}", output.display());

    Ok(())
}
