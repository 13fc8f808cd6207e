//! cvdsim - color vision deficiency simulation for PNG images
//!
//! Wraps `cvdsim-core` for files on disk: simulate one image, render a full
//! reference set, or compare an output against a golden image.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cvdsim_core::{Algorithm, Deficiency, compare::DEFAULT_TOLERANCE};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod image_loader;

#[derive(Parser)]
#[command(name = "cvdsim")]
#[command(author, version, about = "Simulate color vision deficiencies on images")]
#[command(long_about = "
Simulates protanopia, deuteranopia and tritanopia on sRGB images using the
Brettel 1997 and Viénot 1999 models.

Examples:
  cvdsim simulate photo.png out.png -d protan
  cvdsim simulate photo.png out.png -d tritan -s 0.55 -a vienot
  cvdsim render-all photo.png refs/
  cvdsim compare refs/vienot1999_protan_1.0.png out.png

Environment:
  CVDSIM_SEVERITY    default severity (overridden by --config and flags)
  CVDSIM_ALGORITHM   default algorithm: auto, brettel1997, vienot1999
  RUST_LOG           log filter, e.g. cvdsim=debug
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one deficiency on one image
    #[command(visible_alias = "s")]
    Simulate(SimulateArgs),

    /// Render every model, deficiency and reference severity into a directory
    #[command(name = "render-all", visible_alias = "ra")]
    RenderAll(RenderAllArgs),

    /// Compare an image against a golden reference
    #[command(visible_alias = "c")]
    Compare(CompareArgs),
}

#[derive(Args)]
struct SimulateArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    output: PathBuf,

    /// Deficiency: protan, deutan, tritan
    #[arg(short, long)]
    deficiency: Option<Deficiency>,

    /// Severity in [0, 1]; 1.0 simulates full dichromacy
    #[arg(short, long)]
    severity: Option<f32>,

    /// Model: auto, brettel1997, vienot1999
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// JSON file with deficiency, severity and algorithm
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct RenderAllArgs {
    /// Input image
    input: PathBuf,

    /// Output directory (created if missing)
    output_dir: PathBuf,
}

#[derive(Args)]
struct CompareArgs {
    /// Golden reference image
    expected: PathBuf,

    /// Image under test
    actual: PathBuf,

    /// Largest allowed per-channel difference, alpha included
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: u8,

    /// Write the per-channel absolute difference image here
    #[arg(long)]
    diff_output: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    #[cfg(feature = "parallel")]
    if cli.threads > 0 {
        use anyhow::Context;
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }
    #[cfg(not(feature = "parallel"))]
    if cli.threads > 1 {
        tracing::warn!("built without the parallel feature; ignoring -j {}", cli.threads);
    }

    match cli.command {
        Commands::Simulate(args) => commands::simulate::run(args),
        Commands::RenderAll(args) => commands::render_all::run(args),
        Commands::Compare(args) => commands::compare::run(args),
    }
}
