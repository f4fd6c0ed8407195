//! Command-line interface for color_census
//!
//! Loads an image, reports its unique-color counts, prints the ranked
//! palette as JSON, and renders a bar or pie chart PNG next to the input.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use color_census::{analyze_palette, chart, CensusConfig, CensusError, ChartKind, LabelFormat, PaletteReport};

#[derive(Parser, Debug)]
#[command(author, version, about = "Rank the most common colors in an image and chart them")]
struct Args {
    /// Input image path (png/jpg/etc)
    image: PathBuf,

    /// Quantization step applied to each RGB channel
    #[arg(short, long, default_value_t = 10)]
    bucket_size: u32,

    /// Number of top colors to report and chart
    #[arg(short, long, default_value_t = 10)]
    limit: usize,

    /// Skip the N most common colors before the window
    #[arg(short = 'x', long, default_value_t = 0)]
    exclude_top: usize,

    /// Chart shape: bar or pie
    #[arg(short, long, default_value = "bar")]
    chart: ChartKind,

    /// Label format: rgba or hex
    #[arg(short = 'f', long = "labels", default_value = "rgba")]
    label_format: LabelFormat,

    /// Output path for the chart PNG (default: <image stem>_palette.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load all parameters from a JSON config file instead of flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report unique-color counts and the ranked palette without rendering
    #[arg(long)]
    count_only: bool,
}

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("Error: {:#}", error);
        if let Some(census_error) = error.downcast_ref::<CensusError>() {
            eprintln!("Hint: {}", census_error.user_message());
        }
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CensusConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CensusConfig {
            bucket_size: args.bucket_size,
            limit: args.limit,
            exclude_top: args.exclude_top,
            chart: args.chart,
            label_format: args.label_format,
        },
    };

    let report = analyze_palette(&args.image, &config)?;

    // JSON to stdout for programmatic use, summary to stderr for reading
    println!("{}", serde_json::to_string_pretty(&report)?);
    print_summary(&report);

    if args.count_only {
        return Ok(());
    }

    let canvas = chart::render(&report.ranked_entries(), config.chart);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.image));
    chart::save_chart(&canvas, &output)?;
    eprintln!("Wrote {} chart: {}", config.chart, output.display());

    Ok(())
}

fn print_summary(report: &PaletteReport) {
    eprintln!();
    eprintln!(
        "The image contains {} unique colors.",
        report.unique_colors
    );
    eprintln!(
        "With a bucket size of {}, the image contains {} unique colors.",
        report.bucket_size, report.unique_buckets
    );
    eprintln!();

    for (position, entry) in report.entries.iter().enumerate() {
        let share = if report.total_pixels > 0 {
            entry.count as f64 * 100.0 / report.total_pixels as f64
        } else {
            0.0
        };
        eprintln!(
            "{:>3}. {:<18} {:>10}  ({:.1}%)",
            position + 1,
            entry.label,
            entry.count,
            share
        );
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("palette");
    input.with_file_name(format!("{}_palette.png", stem))
}
