//! Bucket frequency counting
//!
//! Builds the frequency table behind the ranked palette: one pass over the
//! pixel sequence, bucketing each pixel and accumulating per-bucket counts.
//! The table records the order in which buckets were first observed; that
//! order is the tie-break for equally frequent buckets during ranking.

use std::collections::{HashMap, HashSet};

use image::Rgb;
use log::debug;

use crate::census::bucket::{quantize_pixel, validate_bucket_size};
use crate::census::rank::RankedEntry;
use crate::error::Result;

/// Frequency table over bucketed colors
///
/// Built by a single pass over a pixel sequence. Immutable after
/// construction; ranking reads it without modifying it, so the same census
/// can be windowed repeatedly with different parameters.
#[derive(Debug, Clone)]
pub struct ColorCensus {
    bucket_size: u32,
    total_pixels: usize,
    /// Bucket color to position in `tallies`
    index: HashMap<Rgb<u8>, usize>,
    /// Per-bucket counts in first-seen order
    tallies: Vec<RankedEntry>,
}

impl ColorCensus {
    /// Count bucket frequencies over a pixel sequence
    ///
    /// Processes the pixels in a single pass. An empty sequence yields an
    /// empty census with a total of zero.
    ///
    /// # Errors
    ///
    /// Returns `CensusError::InvalidParameter` if `bucket_size` is zero.
    pub fn from_pixels<I>(pixels: I, bucket_size: u32) -> Result<Self>
    where
        I: IntoIterator<Item = Rgb<u8>>,
    {
        validate_bucket_size(bucket_size)?;

        let mut index: HashMap<Rgb<u8>, usize> = HashMap::new();
        let mut tallies: Vec<RankedEntry> = Vec::new();
        let mut total_pixels = 0;

        for pixel in pixels {
            total_pixels += 1;
            let bucket = quantize_pixel(pixel, bucket_size);
            match index.get(&bucket) {
                Some(&position) => tallies[position].count += 1,
                None => {
                    index.insert(bucket, tallies.len());
                    tallies.push(RankedEntry {
                        color: bucket,
                        count: 1,
                    });
                }
            }
        }

        debug!(
            "census: {} pixels into {} buckets (bucket size {})",
            total_pixels,
            tallies.len(),
            bucket_size
        );

        Ok(Self {
            bucket_size,
            total_pixels,
            index,
            tallies,
        })
    }

    /// Quantization step the census was built with
    pub fn bucket_size(&self) -> u32 {
        self.bucket_size
    }

    /// Number of pixels counted; equals the sum of all bucket counts
    pub fn total_pixels(&self) -> usize {
        self.total_pixels
    }

    /// Number of distinct buckets observed
    pub fn distinct_buckets(&self) -> usize {
        self.tallies.len()
    }

    /// Count of pixels that fell into the given bucket color
    ///
    /// Returns zero for buckets that were never observed.
    pub fn count_for(&self, bucket: Rgb<u8>) -> usize {
        self.index
            .get(&bucket)
            .map_or(0, |&position| self.tallies[position].count)
    }

    /// All bucket tallies in first-seen order
    pub fn entries(&self) -> &[RankedEntry] {
        &self.tallies
    }
}

/// Count distinct raw pixel values, without bucketing
pub fn count_unique<I>(pixels: I) -> usize
where
    I: IntoIterator<Item = Rgb<u8>>,
{
    let unique: HashSet<Rgb<u8>> = pixels.into_iter().collect();
    unique.len()
}

/// Count distinct bucket colors after quantization
///
/// # Errors
///
/// Returns `CensusError::InvalidParameter` if `bucket_size` is zero.
pub fn count_unique_bucketed<I>(pixels: I, bucket_size: u32) -> Result<usize>
where
    I: IntoIterator<Item = Rgb<u8>>,
{
    validate_bucket_size(bucket_size)?;
    let unique: HashSet<Rgb<u8>> = pixels
        .into_iter()
        .map(|pixel| quantize_pixel(pixel, bucket_size))
        .collect();
    Ok(unique.len())
}
