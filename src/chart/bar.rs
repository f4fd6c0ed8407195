//! Bar chart rasterizer

use image::RgbImage;

use super::{blank_canvas, fill_color};
use crate::census::RankedEntry;
use crate::constants::chart;

/// Render vertical bars, left to right in ranked order
///
/// Bar heights scale linearly against the most frequent entry in the
/// window. A baseline axis is drawn along the bottom of the plot area.
pub(super) fn render(entries: &[RankedEntry]) -> RgbImage {
    let mut canvas = blank_canvas();

    let plot_left = chart::MARGIN;
    let plot_width = chart::WIDTH - 2 * chart::MARGIN;
    let plot_height = chart::HEIGHT - 2 * chart::MARGIN;
    let baseline = chart::HEIGHT - chart::MARGIN;

    for x in plot_left..=(plot_left + plot_width) {
        canvas.put_pixel(x, baseline, image::Rgb(chart::AXIS));
    }

    if entries.is_empty() {
        return canvas;
    }

    let max_count = entries
        .iter()
        .map(|entry| entry.count)
        .max()
        .unwrap_or(0);
    if max_count == 0 {
        return canvas;
    }

    let slot = plot_width / entries.len() as u32;
    let bar_width = slot.saturating_sub(chart::BAR_GAP).max(1);

    for (position, entry) in entries.iter().enumerate() {
        let height = ((entry.count as u64 * u64::from(plot_height)) / max_count as u64) as u32;
        let height = height.max(1);
        let fill = fill_color(entry);

        let x0 = plot_left + position as u32 * slot + chart::BAR_GAP / 2;
        for x in x0..(x0 + bar_width) {
            for y in (baseline - height)..baseline {
                canvas.put_pixel(x, y, fill);
            }
        }
    }

    canvas
}
