//! Default parameters and fixed geometry for the census pipeline
//!
//! This module contains compile-time constants for the ranking pipeline
//! defaults and the chart rasterizer layout.

/// Pipeline defaults
///
/// Mirror the tool's command-line defaults so that a `CensusConfig`
/// built programmatically matches one built from an empty CLI invocation.
pub mod defaults {
    /// Default quantization step applied to each RGB channel
    pub const BUCKET_SIZE: u32 = 10;

    /// Default number of ranked colors to report and chart
    pub const COLOR_LIMIT: usize = 10;

    /// Default number of most-common colors to skip before the window
    pub const EXCLUDE_TOP: usize = 0;
}

/// Chart canvas layout
pub mod chart {
    /// Canvas width in pixels
    pub const WIDTH: u32 = 800;

    /// Canvas height in pixels
    pub const HEIGHT: u32 = 600;

    /// Margin between the canvas edge and the plot area, in pixels
    pub const MARGIN: u32 = 40;

    /// Horizontal gap between adjacent bars, in pixels
    pub const BAR_GAP: u32 = 8;

    /// Canvas background color
    pub const BACKGROUND: [u8; 3] = [255, 255, 255];

    /// Axis line color
    pub const AXIS: [u8; 3] = [64, 64, 64];
}

/// Re-export the default bucket size at top level for convenience
pub const DEFAULT_BUCKET_SIZE: u32 = defaults::BUCKET_SIZE;
