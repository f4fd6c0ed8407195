//! Pie chart rasterizer

use std::f64::consts::TAU;

use image::RgbImage;

use super::{blank_canvas, fill_color};
use crate::census::RankedEntry;
use crate::constants::chart;

/// Render a pie of the windowed counts
///
/// Slices start at twelve o'clock and proceed counterclockwise in ranked
/// order, each spanning its share of the window's total count.
pub(super) fn render(entries: &[RankedEntry]) -> RgbImage {
    let mut canvas = blank_canvas();

    let total: u64 = entries.iter().map(|entry| entry.count as u64).sum();
    if total == 0 {
        return canvas;
    }

    // End angle of each slice, cumulative over the window
    let mut slice_ends = Vec::with_capacity(entries.len());
    let mut running = 0u64;
    for entry in entries {
        running += entry.count as u64;
        slice_ends.push(TAU * running as f64 / total as f64);
    }
    let fills: Vec<_> = entries.iter().map(fill_color).collect();

    let cx = f64::from(chart::WIDTH) / 2.0;
    let cy = f64::from(chart::HEIGHT) / 2.0;
    let radius = f64::from(chart::WIDTH.min(chart::HEIGHT) / 2 - chart::MARGIN);

    for y in 0..chart::HEIGHT {
        for x in 0..chart::WIDTH {
            let ux = (f64::from(x) + 0.5) - cx;
            let uy = cy - (f64::from(y) + 0.5);
            if ux * ux + uy * uy > radius * radius {
                continue;
            }

            // 0 at twelve o'clock, increasing counterclockwise
            let angle = (-ux).atan2(uy).rem_euclid(TAU);
            let slice = slice_ends
                .iter()
                .position(|&end| angle < end)
                .unwrap_or(slice_ends.len() - 1);
            canvas.put_pixel(x, y, fills[slice]);
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_single_entry_fills_disc() {
        let entries = [RankedEntry {
            color: Rgb([10, 120, 240]),
            count: 3,
        }];
        let canvas = render(&entries);

        assert_eq!(
            *canvas.get_pixel(chart::WIDTH / 2, chart::HEIGHT / 2),
            Rgb([10, 120, 240])
        );
        // Corners stay background; the disc never reaches them
        assert_eq!(*canvas.get_pixel(0, 0), Rgb(chart::BACKGROUND));
    }

    #[test]
    fn test_equal_slices_split_left_and_right() {
        let entries = [
            RankedEntry {
                color: Rgb([200, 0, 0]),
                count: 4,
            },
            RankedEntry {
                color: Rgb([0, 0, 200]),
                count: 4,
            },
        ];
        let canvas = render(&entries);

        let cy = chart::HEIGHT / 2;
        let quarter = (chart::WIDTH.min(chart::HEIGHT) / 2 - chart::MARGIN) / 2;
        // First slice sweeps counterclockwise from twelve o'clock into the
        // left half; the second covers the right half
        assert_eq!(
            *canvas.get_pixel(chart::WIDTH / 2 - quarter, cy),
            Rgb([200, 0, 0])
        );
        assert_eq!(
            *canvas.get_pixel(chart::WIDTH / 2 + quarter, cy),
            Rgb([0, 0, 200])
        );
    }

    #[test]
    fn test_slice_shares_follow_counts() {
        // 3:1 split; the quarter slice covers angles [3π/2, 2π), which is
        // the upper-right quadrant
        let entries = [
            RankedEntry {
                color: Rgb([200, 0, 0]),
                count: 6,
            },
            RankedEntry {
                color: Rgb([0, 200, 0]),
                count: 2,
            },
        ];
        let canvas = render(&entries);

        let quarter = (chart::WIDTH.min(chart::HEIGHT) / 2 - chart::MARGIN) / 2;
        let upper_right = (chart::WIDTH / 2 + quarter, chart::HEIGHT / 2 - quarter);
        let lower_right = (chart::WIDTH / 2 + quarter, chart::HEIGHT / 2 + quarter);
        assert_eq!(*canvas.get_pixel(upper_right.0, upper_right.1), Rgb([0, 200, 0]));
        assert_eq!(*canvas.get_pixel(lower_right.0, lower_right.1), Rgb([200, 0, 0]));
    }
}
