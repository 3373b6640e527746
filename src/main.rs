use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use dartboard::config::{DEFAULT_OUTPUT, DEFAULT_SUBDIVISIONS, FileConfig, MAX_SUBDIVISIONS};
use dartboard::geometry::validate_target;
use dartboard::{BedKind, BoardDimensions, FormatVersion, Subdivisions, Target};
use dartboard::{generate_target, write_target};

/// Generate the polygonal scoring-bed model of a standard dartboard
///
/// Examples:
///   # Default board: 8 segments per arc, written to target.out
///   dartboard
///
///   # Smoother arcs into a custom file
///   dartboard 64 board.out
///
///   # Include color and bed kind on every header line
///   dartboard 16 board.out --format v2
#[derive(Parser, Debug)]
#[command(name = "dartboard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Straight segments per arc, 1-4096 [default: 8]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_SUBDIVISIONS as i64))]
    subdivisions: Option<u32>,

    /// Output target file [default: target.out]
    output: Option<PathBuf>,

    /// Header layout: v1 = "score vertex_count", v2 adds "color kind" [default: v1]
    #[arg(long, value_enum)]
    format: Option<FormatVersion>,

    /// Path to config file (optional, auto-searches dartboard.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let loaded = match args.config {
        Some(ref config_path) => Some((config_path.clone(), FileConfig::from_path(config_path)?)),
        None => FileConfig::discover(),
    };
    let (config_source, file_config) = loaded.unzip();

    let subdivisions = args
        .subdivisions
        .or_else(|| file_config.as_ref().and_then(|c| c.subdivisions))
        .unwrap_or(DEFAULT_SUBDIVISIONS);
    let subdivisions =
        Subdivisions::new(subdivisions).context("Invalid subdivision count in config file")?;
    let output_path = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let format = args
        .format
        .or_else(|| file_config.as_ref().and_then(|c| c.format))
        .unwrap_or_default();
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    println!("dartboard - Target Generator");
    println!("============================");
    println!();

    let dims = BoardDimensions::standard();

    if verbose {
        println!("Configuration:");
        if let Some(ref source) = config_source {
            println!("  Config file: {}", source.display());
        }
        println!("  Subdivisions: {}", subdivisions);
        println!("  Format: {}", format);
        println!("  Output: {}", output_path.display());
        let radii = dims.radii();
        println!(
            "  Radii: bull {:.2}/{:.2}mm, treble {:.1}-{:.1}mm, double {:.1}-{:.1}mm",
            radii[0], radii[1], radii[2], radii[3], radii[4], radii[5]
        );
        println!();
    }

    dims.validate().context("Invalid board dimensions")?;

    let target = run_stage(
        "Generating scoring beds...",
        || Ok(generate_target(&dims, subdivisions)),
        |target| {
            format!(
                "Generated {} beds with {} vertices",
                target.len(),
                target.vertex_count()
            )
        },
    )?;
    if verbose {
        print_bed_breakdown(&target);
    }

    let report = run_stage(
        "Validating bed polygons...",
        || Ok(validate_target(&target)),
        |report| report.summary(),
    )?;
    if !report.is_valid() {
        for warning in &report.warnings {
            eprintln!("Warning: {}", warning);
        }
        bail!("Generated target failed validation; nothing written");
    }

    run_stage(
        "Writing target file...",
        || write_target(&output_path, &target, format).context("Failed to write target file"),
        |_| format!("Wrote {} beds ({} format)", target.len(), format),
    )?;

    println!();
    println!(
        "Done! Total time: {:.3}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", output_path.display());

    Ok(())
}

fn print_bed_breakdown(target: &Target) {
    for kind in BedKind::ALL {
        println!("  {:<13} {:>3} beds", kind.token(), target.count_kind(kind));
    }
    if let Some(bounds) = target.bounds() {
        println!(
            "  Extent: x {:.2}..{:.2}mm, y {:.2}..{:.2}mm",
            bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
        );
    }
}

/// Run one pipeline step behind a spinner
///
/// On success the spinner is replaced by `done`'s message and the elapsed
/// time; on failure it is left showing which step stopped.
fn run_stage<T>(
    message: &str,
    work: impl FnOnce() -> Result<T>,
    done: impl FnOnce(&T) -> String,
) -> Result<T> {
    let spinner = ProgressBar::new_spinner().with_message(message.to_string());
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    match work() {
        Ok(value) => {
            spinner.finish_with_message(format!(
                "{} [{:.3}s]",
                done(&value),
                start.elapsed().as_secs_f32()
            ));
            Ok(value)
        }
        Err(e) => {
            spinner.abandon_with_message(format!("{} failed", message.trim_end_matches('.')));
            Err(e)
        }
    }
}
