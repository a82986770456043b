//! Flat-shaded sphere renderer
use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use ray_casting::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about = "Render a sphere scene with flat shading and hard shadows")]
struct Args {
    /// Scene description file (YAML)
    scene: PathBuf,

    /// Output image; the format follows the extension (.png, .ppm, ...)
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let file = File::open(&args.scene)
        .with_context(|| format!("opening scene file {}", args.scene.display()))?;
    let config: RenderConfig = serde_yaml::from_reader(file)
        .with_context(|| format!("parsing scene file {}", args.scene.display()))?;

    let camera = Camera::from_config(config.camera);
    let scene = Scene::from_config(config.scene);

    let image = render(&camera, &scene, config.width, config.height);
    image
        .to_rgb8()
        .save(&args.output)
        .with_context(|| format!("writing image {}", args.output.display()))?;

    Ok(())
}
