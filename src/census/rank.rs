//! Ranking and windowing over the frequency table
//!
//! Sorts bucket tallies by count descending and cuts a contiguous window
//! out of the ranked list. Ties keep the order in which their buckets were
//! first observed during counting, so ranking is deterministic for a given
//! pixel sequence.

use image::Rgb;
use palette::Srgb;

use crate::census::frequency::ColorCensus;

/// A bucket color together with the number of pixels that mapped to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    /// Quantized bucket color
    pub color: Rgb<u8>,
    /// Pixels counted into this bucket
    pub count: usize,
}

impl RankedEntry {
    /// Bucket color with each channel normalized to [0.0, 1.0]
    ///
    /// This is the form the chart renderer consumes.
    pub fn normalized(&self) -> Srgb<f32> {
        let Rgb([r, g, b]) = self.color;
        Srgb::new(r, g, b).into_format()
    }
}

impl ColorCensus {
    /// Rank buckets by frequency and cut a window from the ranked list
    ///
    /// Buckets are sorted by count descending; equally frequent buckets
    /// retain first-seen order (the sort is stable over the insertion-ordered
    /// tallies). The window covers `[exclude_top, exclude_top + limit)` of
    /// the sorted list and truncates silently when it runs past the end;
    /// a window entirely past the end, or a zero `limit`, yields an empty
    /// list rather than an error.
    pub fn rank(&self, exclude_top: usize, limit: usize) -> Vec<RankedEntry> {
        let mut sorted = self.entries().to_vec();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.into_iter().skip(exclude_top).take(limit).collect()
    }
}
