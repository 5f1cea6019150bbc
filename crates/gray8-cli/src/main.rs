//! gray8 - 8-bit grayscale image tool
//!
//! Loads binary PGM images, applies one operation and writes the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gray8")]
#[command(author, version, about = "8-bit grayscale PGM image tool")]
#[command(long_about = "
Applies point, geometric, compositing, search and blur operations to
binary (P5) PGM images.

Examples:
  gray8 info photo.pgm
  gray8 negative photo.pgm -o neg.pgm
  gray8 crop photo.pgm -x 10 -y 20 -W 64 -H 64 -o patch.pgm
  gray8 locate photo.pgm patch.pgm
  gray8 blend photo.pgm logo.pgm -x 5 -y 5 -a 0.3 -o marked.pgm
  gray8 --stats blur photo.pgm --dx 3 --dy 3 -o soft.pgm
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print pixel access / comparison counters and elapsed time
    #[arg(long, global = true)]
    stats: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image dimensions, max gray and level range
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Photographic negative
    Negative(PointArgs),

    /// Binarize at a threshold level
    Threshold(ThresholdArgs),

    /// Scale gray levels by a factor
    Brighten(BrightenArgs),

    /// Rotate 90 degrees counter-clockwise
    Rotate(PointArgs),

    /// Mirror left to right
    Mirror(PointArgs),

    /// Crop a rectangle
    Crop(CropArgs),

    /// Paste one image onto another
    Paste(PasteArgs),

    /// Alpha-blend one image onto another
    Blend(BlendArgs),

    /// Find a sub-image
    Locate(LocateArgs),

    /// Mean blur with a clipped window
    Blur(BlurArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

// Shared by single-image commands without parameters.
#[derive(Args)]
struct PointArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct ThresholdArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Levels below this become black, the rest white
    #[arg(short, long)]
    threshold: u8,
}

#[derive(Args)]
struct BrightenArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Multiplier (>= 0)
    #[arg(short, long)]
    factor: f64,
}

#[derive(Args)]
struct CropArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Left edge
    #[arg(short, default_value = "0")]
    x: u32,

    /// Top edge
    #[arg(short, default_value = "0")]
    y: u32,

    /// Crop width
    #[arg(short = 'W', long = "width")]
    w: u32,

    /// Crop height
    #[arg(short = 'H', long = "height")]
    h: u32,
}

#[derive(Args)]
struct PasteArgs {
    /// Background image
    background: PathBuf,

    /// Image to paste
    foreground: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// X offset
    #[arg(short, default_value = "0")]
    x: u32,

    /// Y offset
    #[arg(short, default_value = "0")]
    y: u32,
}

#[derive(Args)]
struct BlendArgs {
    /// Background image
    background: PathBuf,

    /// Image to blend in
    foreground: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// X offset
    #[arg(short, default_value = "0")]
    x: u32,

    /// Y offset
    #[arg(short, default_value = "0")]
    y: u32,

    /// Foreground weight (0 keeps the background, 1 pastes)
    #[arg(short, long, default_value = "0.5")]
    alpha: f64,
}

#[derive(Args)]
struct LocateArgs {
    /// Image to search
    image: PathBuf,

    /// Sub-image to find
    pattern: PathBuf,
}

#[derive(Args)]
struct BlurArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Horizontal half-width of the window
    #[arg(long, default_value = "1")]
    dx: u32,

    /// Vertical half-height of the window
    #[arg(long, default_value = "1")]
    dy: u32,

    /// Use the per-pixel reference implementation
    #[arg(long)]
    naive: bool,
}

/// Installs the global subscriber. The returned guard flushes the log file
/// on drop and must live until exit.
fn init_tracing(verbose: u8, log: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    match log {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log path: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.verbose, cli.log.as_ref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let verbose = cli.verbose;
    let (result, counters, elapsed) = gray8_core::instrument::measure(|| match cli.command {
        Commands::Info(args) => commands::info::run(args, verbose),
        Commands::Negative(args) => commands::point::run_negative(args, verbose),
        Commands::Threshold(args) => commands::point::run_threshold(args, verbose),
        Commands::Brighten(args) => commands::point::run_brighten(args, verbose),
        Commands::Rotate(args) => commands::transform::run_rotate(args, verbose),
        Commands::Mirror(args) => commands::transform::run_mirror(args, verbose),
        Commands::Crop(args) => commands::crop::run(args, verbose),
        Commands::Paste(args) => commands::paste::run(args, verbose),
        Commands::Blend(args) => commands::composite::run(args, verbose),
        Commands::Locate(args) => commands::locate::run(args, verbose),
        Commands::Blur(args) => commands::blur::run(args, verbose),
    });

    if cli.stats {
        eprintln!("{counters} time={:.3}ms", elapsed.as_secs_f64() * 1000.0);
    }
    result
}
