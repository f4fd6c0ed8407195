//! # Color Census
//!
//! A Rust crate for ranking the most common colors in an image.
//!
//! This library quantizes pixel colors into buckets, counts how many
//! pixels fall into each bucket, and reports a ranked, labeled window of
//! the most frequent buckets:
//! - Bucketing rounds each channel down to a multiple of the bucket size
//! - Counting is a single pass that records first-seen order for ties
//! - Ranking sorts by frequency and cuts an `exclude_top`/`limit` window
//! - Labels render as `RGBA(r, g, b)` or `#rrggbb` strings
//!
//! Image decoding and chart rasterization live at the edges of the crate;
//! the census core is pure and re-entrant.
//!
//! ## Example
//!
//! ```rust,no_run
//! use color_census::{analyze_palette, CensusConfig};
//! use std::path::Path;
//!
//! let report = analyze_palette(Path::new("photo.jpg"), &CensusConfig::default())?;
//! println!("{} buckets, top color {}", report.unique_buckets, report.entries[0].label);
//! # Ok::<(), color_census::CensusError>(())
//! ```

use std::path::Path;

use image::Rgb;
use log::info;
use serde::{Deserialize, Serialize};

pub mod census;
pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;

pub use census::{bucket_color, count_unique, count_unique_bucketed, ColorCensus, LabelFormat, RankedEntry};
pub use chart::ChartKind;
pub use config::CensusConfig;
pub use error::{CensusError, Result};

/// One ranked color in a palette report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Bucket color channels
    pub rgb: [u8; 3],
    /// Pixels counted into this bucket
    pub count: usize,
    /// Display label in the configured format
    pub label: String,
}

/// Complete result of a palette census over one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteReport {
    /// Total pixels counted
    pub total_pixels: usize,
    /// Distinct raw colors before bucketing
    pub unique_colors: usize,
    /// Distinct buckets after quantization
    pub unique_buckets: usize,
    /// Quantization step the census used
    pub bucket_size: u32,
    /// Ranked window of bucket colors, most frequent first
    pub entries: Vec<PaletteEntry>,
}

impl PaletteReport {
    /// The ranked window as chart-renderer input
    pub fn ranked_entries(&self) -> Vec<RankedEntry> {
        self.entries
            .iter()
            .map(|entry| RankedEntry {
                color: Rgb(entry.rgb),
                count: entry.count,
            })
            .collect()
    }
}

/// Analyze the color palette of an image file
///
/// This is the main entry point. It loads the image, counts bucket
/// frequencies in a single pass, and returns the ranked, labeled window
/// selected by the configuration.
///
/// # Arguments
///
/// * `image_path` - Path to the image file
/// * `config` - Census parameters; validated before any work happens
///
/// # Errors
///
/// Returns `CensusError` if:
/// - The configuration is invalid (zero bucket size)
/// - The image cannot be loaded or decoded
pub fn analyze_palette(image_path: &Path, config: &CensusConfig) -> Result<PaletteReport> {
    config.validate()?;

    let pixels = image_loader::load_pixels(image_path)?;
    info!("loaded {} pixels from {}", pixels.len(), image_path.display());

    let unique_colors = census::count_unique(pixels.iter().copied());
    let color_census = ColorCensus::from_pixels(pixels.iter().copied(), config.bucket_size)?;

    let entries = color_census
        .rank(config.exclude_top, config.limit)
        .into_iter()
        .map(|entry| PaletteEntry {
            rgb: entry.color.0,
            count: entry.count,
            label: config.label_format.format(entry.color),
        })
        .collect();

    Ok(PaletteReport {
        total_pixels: color_census.total_pixels(),
        unique_colors,
        unique_buckets: color_census.distinct_buckets(),
        bucket_size: config.bucket_size,
        entries,
    })
}
