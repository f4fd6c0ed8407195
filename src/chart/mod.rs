//! Chart rasterization for ranked palettes
//!
//! Renders the windowed ranking onto an RGB canvas as either a bar chart
//! or a pie chart and saves the result as a PNG. The rasterizers take the
//! normalized color values supplied by the ranking core, the same way the
//! original matplotlib collaborator did.

mod bar;
mod pie;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::{Rgb, RgbImage};
use log::info;
use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::census::RankedEntry;
use crate::constants::chart;
use crate::error::{CensusError, Result};

/// Which chart shape to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Vertical bars, heights proportional to counts
    Bar,
    /// Disc slices proportional to each entry's share of the window
    Pie,
}

impl FromStr for ChartKind {
    type Err = CensusError;

    fn from_str(selector: &str) -> Result<Self> {
        match selector.to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "pie" => Ok(ChartKind::Pie),
            _ => Err(CensusError::invalid_parameter("chart_type", selector)),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Pie => write!(f, "pie"),
        }
    }
}

/// Render the ranked window as the chosen chart kind
///
/// An empty window produces a blank canvas rather than an error.
pub fn render(entries: &[RankedEntry], kind: ChartKind) -> RgbImage {
    info!("rendering {} chart with {} entries", kind, entries.len());
    match kind {
        ChartKind::Bar => bar::render(entries),
        ChartKind::Pie => pie::render(entries),
    }
}

/// Save a rendered chart to disk
///
/// The output format follows the file extension; PNG is the conventional
/// choice.
///
/// # Errors
///
/// Returns `CensusError::ChartWriteError` if encoding or writing fails.
pub fn save_chart(canvas: &RgbImage, path: &Path) -> Result<()> {
    canvas.save(path).map_err(|e| {
        CensusError::chart_write(path, format!("could not encode or write image: {}", e), e)
    })?;
    info!("wrote chart to {}", path.display());
    Ok(())
}

/// Blank canvas at the configured chart dimensions
fn blank_canvas() -> RgbImage {
    RgbImage::from_pixel(chart::WIDTH, chart::HEIGHT, Rgb(chart::BACKGROUND))
}

/// Fill color for an entry, round-tripped through the normalized form the
/// renderer is handed
fn fill_color(entry: &RankedEntry) -> Rgb<u8> {
    let srgb: Srgb<u8> = entry.normalized().into_format();
    Rgb([srgb.red, srgb.green, srgb.blue])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CensusError;

    #[test]
    fn test_parse_chart_selectors() {
        assert_eq!("bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        assert_eq!("PIE".parse::<ChartKind>().unwrap(), ChartKind::Pie);
    }

    #[test]
    fn test_parse_unknown_chart_selector_fails() {
        let err = "scatter".parse::<ChartKind>().unwrap_err();
        assert!(matches!(err, CensusError::InvalidParameter { .. }));
    }

    #[test]
    fn test_render_empty_window_is_blank_canvas() {
        for kind in [ChartKind::Bar, ChartKind::Pie] {
            let canvas = render(&[], kind);
            assert_eq!(canvas.dimensions(), (chart::WIDTH, chart::HEIGHT));
        }
    }

    #[test]
    fn test_fill_color_round_trips_normalization() {
        let entry = RankedEntry {
            color: image::Rgb([10, 200, 255]),
            count: 1,
        };
        assert_eq!(fill_color(&entry), image::Rgb([10, 200, 255]));
    }
}
