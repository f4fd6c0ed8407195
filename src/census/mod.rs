//! Color bucketing, frequency counting, and ranking
//!
//! This module is the core of the crate: it quantizes raw pixels into
//! buckets, counts how many pixels fall into each bucket, and ranks the
//! buckets by frequency with an optional window over the ranked list.

pub mod bucket;
pub mod frequency;
pub mod label;
pub mod rank;

pub use bucket::bucket_color;
pub use frequency::{count_unique, count_unique_bucketed, ColorCensus};
pub use label::LabelFormat;
pub use rank::RankedEntry;
