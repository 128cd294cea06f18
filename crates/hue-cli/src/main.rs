//! hue - color grading from the command line
//!
//! Drives the hue-ops engines over PNG and JPEG files.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "hue")]
#[command(author, version, about = "Interactive-style photo color grading")]
#[command(long_about = "
Applies one of four grading transforms to an image. Pixels with alpha 0
are skipped and come out fully transparent.

Examples:
  hue info photo.png                             # Size and transparent pixels
  hue matrix in.png -o out.png --matrix 0,0,255,0,0,0,255,0,0,0,255,0,0,0,0
  hue matrix in.png -o out.png --modifier tex.png --preset look.yaml
  hue rotate in.png -o out.png --angles 0,0,43
  hue pigment in.jpg -o out.jpg --pigments 200,128,90,128,128,128 -q 95
  hue negate in.png -o out.png
  hue preset -o look.yaml                        # Write a default preset
  hue apply in.png -o out.png --preset look.yaml --transform pigment
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image dimensions and transparent pixel count
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Mix channels through a 3x5 matrix over base RGB and modifier RG
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Rotate colors around mid-gray by three angles
    #[command(visible_alias = "r")]
    Rotate(RotateArgs),

    /// Tint with pigment ratios and channel swaps
    #[command(visible_alias = "p")]
    Pigment(PigmentArgs),

    /// Negate color channels
    Negate(NegateArgs),

    /// Apply one transform from a preset file
    Apply(ApplyArgs),

    /// Write a preset file with default parameters
    Preset(PresetArgs),
}

/// Input/output paths shared by every transform.
#[derive(Args)]
struct IoArgs {
    /// Input image
    input: PathBuf,

    /// Output image (format from extension)
    #[arg(short, long)]
    output: PathBuf,

    /// JPEG quality 1-100 (default 90)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct MatrixArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Modifier image feeding matrix columns 4 and 5 (must match input size)
    #[arg(long)]
    modifier: Option<PathBuf>,

    /// Preset file to start from
    #[arg(long)]
    preset: Option<PathBuf>,

    /// 15 comma-separated bytes, row-major (R row, G row, B row)
    #[arg(long)]
    matrix: Option<String>,
}

#[derive(Args)]
struct RotateArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Preset file to start from
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Roll, pitch, yaw bytes (n * PI / 128 radians each)
    #[arg(long)]
    angles: Option<String>,
}

#[derive(Args)]
struct PigmentArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Preset file to start from
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Six bytes: R,G,B tint then RG,GB,RB swap (128 = neutral)
    #[arg(long)]
    pigments: Option<String>,
}

#[derive(Args)]
struct NegateArgs {
    #[command(flatten)]
    io: IoArgs,
}

#[derive(Args)]
struct ApplyArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Transform to render: matrix, rotation, pigment, negate
    #[arg(short, long)]
    transform: String,

    /// Preset file
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Modifier image for the matrix transform
    #[arg(long)]
    modifier: Option<PathBuf>,

    /// Override the preset matrix (15 bytes)
    #[arg(long)]
    matrix: Option<String>,

    /// Override the preset angles (3 bytes)
    #[arg(long)]
    angles: Option<String>,

    /// Override the preset pigments (6 bytes)
    #[arg(long)]
    pigments: Option<String>,
}

#[derive(Args)]
struct PresetArgs {
    /// Output preset file (.yaml)
    #[arg(short, long)]
    output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

/// Installs the stderr subscriber and, with `--log`, a non-blocking file
/// writer. The returned guard must live until exit so buffered lines flush.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install logger")?;

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Matrix(args) => commands::grade::run_matrix(args, cli.verbose),
        Commands::Rotate(args) => commands::grade::run_rotate(args, cli.verbose),
        Commands::Pigment(args) => commands::grade::run_pigment(args, cli.verbose),
        Commands::Negate(args) => commands::grade::run_negate(args, cli.verbose),
        Commands::Apply(args) => commands::grade::run_apply(args, cli.verbose),
        Commands::Preset(args) => commands::preset::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_counts_and_is_global() {
        let cli = Cli::try_parse_from(["hue", "negate", "a.png", "-o", "b.png", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Negate(_)));
    }

    #[test]
    fn test_quality_range_enforced() {
        assert!(Cli::try_parse_from(["hue", "negate", "a.png", "-o", "b.jpg", "-q", "0"]).is_err());
        assert!(Cli::try_parse_from(["hue", "negate", "a.png", "-o", "b.jpg", "-q", "75"]).is_ok());
    }
}
