//! glint command-line renderer.

use anyhow::{Context, Result};
use clap::Parser;
use glint_math::Vec3;
use glint_render::{random_scene, render, Camera, CameraConfig, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;

/// Monte Carlo path tracer for sphere scenes.
#[derive(Debug, Parser)]
#[command(name = "glint", version)]
struct Args {
    /// Output image path; .png renders PNG, anything else plain-text PPM
    #[arg(default_value = "img.ppm")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 340)]
    height: u32,

    /// Samples per pixel
    #[arg(long, default_value_t = 100)]
    samples: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value_t = 8)]
    max_depth: u32,

    /// Seed for scene generation and sampling
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scene_rng = StdRng::seed_from_u64(args.seed);
    let world = random_scene(&mut scene_rng).context("failed to build scene")?;

    let camera = Camera::new(&CameraConfig {
        look_from: Vec3::new(13.0, 2.0, 3.0),
        look_at: Vec3::ZERO,
        vup: Vec3::Y,
        vfov: 20.0,
        aspect: args.width as f32 / args.height as f32,
        aperture: 0.1,
        focus_dist: 10.0,
    });

    let config = RenderConfig {
        samples_per_pixel: args.samples,
        max_depth: args.max_depth,
        seed: args.seed,
    };

    log::info!(
        "rendering {}x{} @ {} spp, max depth {}",
        args.width,
        args.height,
        config.samples_per_pixel,
        config.max_depth
    );

    let start = Instant::now();
    let image = render(&camera, &world, args.width, args.height, &config);
    log::info!("rendered in {:?}", start.elapsed());

    image
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("saved to {}", args.output.display());

    Ok(())
}
