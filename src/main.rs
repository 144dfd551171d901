use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use palette_dither::{dither_in_place, Palette};
use palettize::image_io;

#[derive(Parser)]
#[command(name = "palettize")]
#[command(about = "Reduce a PNG to a small color palette with Floyd-Steinberg dithering")]
struct Cli {
    /// Input PNG file
    input: PathBuf,

    /// Output PNG file
    output: PathBuf,

    /// Palette colors as hex RGB (e.g. "#000000" FFFFFF "#F00"), 1-255 entries
    #[arg(required = true, num_args = 1..=255)]
    colors: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let tokens: Vec<&str> = cli.colors.iter().map(String::as_str).collect();
    let palette = Palette::from_hex(&tokens).context("invalid palette")?;
    tracing::debug!(colors = palette.len(), "palette ready");

    let mut buffer = image_io::decode_png(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    tracing::info!(
        width = buffer.width(),
        height = buffer.height(),
        colors = palette.len(),
        "dithering"
    );

    let start = Instant::now();
    dither_in_place(&mut buffer, &palette);
    tracing::debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dither pass complete"
    );

    image_io::encode_png(&cli.output, &buffer)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    tracing::info!(output = %cli.output.display(), "wrote dithered image");

    Ok(())
}
