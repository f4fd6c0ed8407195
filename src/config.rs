//! Configuration for the palette census pipeline.
//!
//! All tunable parameters for a single analysis run, serializable to JSON
//! so an exact invocation can be kept alongside its chart.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use color_census::CensusConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = CensusConfig::from_json_file(Path::new("census.json"))?;
//!
//! // Or use defaults
//! let config = CensusConfig::default();
//! # Ok::<(), color_census::CensusError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::census::LabelFormat;
use crate::chart::ChartKind;
use crate::constants::defaults;
use crate::error::{CensusError, Result};

/// Complete parameter set for one census run.
///
/// The defaults mirror an unadorned CLI invocation: bucket size 10, the
/// top ten colors, nothing excluded, a bar chart with RGBA labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusConfig {
    /// Quantization step applied to each RGB channel
    pub bucket_size: u32,

    /// Number of ranked colors in the reported window
    pub limit: usize,

    /// Most-common colors to skip before the window starts
    pub exclude_top: usize,

    /// Chart shape to render
    pub chart: ChartKind,

    /// Label rendering for reported colors
    pub label_format: LabelFormat,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            bucket_size: defaults::BUCKET_SIZE,
            limit: defaults::COLOR_LIMIT,
            exclude_top: defaults::EXCLUDE_TOP,
            chart: ChartKind::Bar,
            label_format: LabelFormat::Rgba,
        }
    }
}

impl CensusConfig {
    /// Validate parameter ranges before any computation runs
    ///
    /// # Errors
    ///
    /// Returns `CensusError::InvalidParameter` if `bucket_size` is zero.
    /// Negative window parameters are unrepresentable; zero values are
    /// valid and simply shrink the window.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_size == 0 {
            return Err(CensusError::invalid_parameter(
                "bucket_size",
                self.bucket_size,
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CensusError::config(format!("failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            CensusError::config(format!("failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CensusError::config("failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            CensusError::config(format!("failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_cli_defaults() {
        let config = CensusConfig::default();
        assert_eq!(config.bucket_size, 10);
        assert_eq!(config.limit, 10);
        assert_eq!(config.exclude_top, 0);
        assert_eq!(config.chart, ChartKind::Bar);
        assert_eq!(config.label_format, LabelFormat::Rgba);
    }

    #[test]
    fn test_validate_rejects_zero_bucket() {
        let config = CensusConfig {
            bucket_size: 0,
            ..CensusConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CensusError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = CensusConfig {
            bucket_size: 20,
            limit: 5,
            exclude_top: 2,
            chart: ChartKind::Pie,
            label_format: LabelFormat::Hex,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"pie\""));
        assert!(json.contains("\"hex\""));

        let parsed: CensusConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_negative_window_rejected_at_parse() {
        let json = r#"{"bucket_size":10,"limit":-3,"exclude_top":0,"chart":"bar","label_format":"rgba"}"#;
        assert!(serde_json::from_str::<CensusConfig>(json).is_err());
    }
}
