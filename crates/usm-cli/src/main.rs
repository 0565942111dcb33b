//! usm - Unsharp-mask image sharpening CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "usm")]
#[command(author, version, about = "Unsharp-mask image sharpening CLI")]
#[command(long_about = "
Sharpens images with an unsharp mask: blur, subtract the blur from the
original to extract detail, then add the detail back.

Examples:
  usm info photo.jpg                    # Show image info
  usm sharpen photo.jpg -o sharp.png -r 2
  usm blur photo.png -o soft.png -r 5   # Gaussian blur only
  usm diff a.png b.png -o delta.png     # Clamped per-channel difference
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Apply Gaussian blur
    Blur(BlurArgs),

    /// Apply unsharp-mask sharpening
    #[command(visible_alias = "s")]
    Sharpen(SharpenArgs),

    /// Compute clamped per-channel difference of two images
    #[command(visible_alias = "d")]
    Diff(DiffArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct BlurArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Blur radius (kernel size = 2*radius+1)
    #[arg(short, long, default_value = "2")]
    radius: i32,
}

#[derive(Args)]
struct SharpenArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Blur radius of the unsharp mask
    #[arg(short, long, default_value = "2")]
    radius: i32,
}

#[derive(Args)]
struct DiffArgs {
    /// First image
    a: PathBuf,

    /// Second image
    b: PathBuf,

    /// Output difference image
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Blur(args) => commands::blur::run(args, cli.verbose),
        Commands::Sharpen(args) => commands::sharpen::run(args, cli.verbose),
        Commands::Diff(args) => commands::diff::run(args, cli.verbose),
    }
}
