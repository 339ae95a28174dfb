use std::path::PathBuf;

use clap::Parser;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Render a POV-Ray scene subset to a TGA image")]
pub struct Args {
    /// Image width in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Scene description file (.pov)
    pub scene: PathBuf,
}

impl Args {
    /// Output image path: the scene's file stem with a `.tga` extension,
    /// in the working directory.
    pub fn output_path(&self) -> PathBuf {
        let stem = self
            .scene
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "render".into());
        PathBuf::from(stem).with_extension("tga")
    }
}
