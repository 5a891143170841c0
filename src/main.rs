use anyhow::Result;
use atlas_scale::cpu::ResampleFilter;
use clap::Parser;
use mip_atlas::config::{AtlasConfig, ResampleBackend};
use std::path::PathBuf;

/// Generate a texture atlas holding every mip level of an 8K texture.
#[derive(Parser, Debug)]
#[command(name = "mip-atlas")]
#[command(about = "Generate texture atlas with mipmaps for an 8K texture")]
#[command(long_about = "Stack every mip level of an 8192x8192 texture into one 8192x16384 PNG.
Each level is resized directly from the source, level 0 at the top.")]
struct Args {
    /// Path to the input 8K texture image
    #[arg(short, long)]
    input: PathBuf,

    /// Path to save the texture atlas image
    #[arg(short, long)]
    output: PathBuf,

    /// Downsampling filter
    #[arg(short, long, default_value = "lanczos3",
          help = "Downsampling filter: nearest, bilinear, catmull-rom, mitchell, lanczos3")]
    filter: String,

    /// Resampler implementation
    #[arg(long, default_value = "simd",
          help = "Resize backend: simd (fast_image_resize) or image (image::imageops)")]
    backend: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let filter: ResampleFilter = args.filter.parse().map_err(anyhow::Error::msg)?;
    let backend: ResampleBackend = args.backend.parse().map_err(anyhow::Error::msg)?;

    println!("{} {}", args.input.display(), args.output.display());

    let config = AtlasConfig::new(args.input, args.output)
        .with_filter(filter)
        .with_backend(backend);

    let summary = mip_atlas::build_atlas(&config)?;
    println!(
        "Texture atlas with mipmaps saved at {} ({} levels, {}x{})",
        summary.output.display(),
        summary.levels,
        summary.atlas.w,
        summary.atlas.h
    );
    Ok(())
}
