//! Label rendering for ranked colors
//!
//! A closed set of label formats, validated at the parse boundary. An
//! unrecognized selector fails with `InvalidParameter` instead of letting
//! an unlabeled chart through.

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::{CensusError, Result};

/// How a bucket color is rendered to a display string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    /// Decimal channel triple, e.g. `RGBA(255, 0, 0)`
    Rgba,
    /// Lowercase hex code, e.g. `#ff0000`
    Hex,
}

impl LabelFormat {
    /// Render a bucket color in this format
    pub fn format(&self, color: Rgb<u8>) -> String {
        let Rgb([r, g, b]) = color;
        match self {
            LabelFormat::Rgba => format!("RGBA({}, {}, {})", r, g, b),
            LabelFormat::Hex => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

impl FromStr for LabelFormat {
    type Err = CensusError;

    fn from_str(selector: &str) -> Result<Self> {
        match selector.to_ascii_lowercase().as_str() {
            "rgba" => Ok(LabelFormat::Rgba),
            "hex" => Ok(LabelFormat::Hex),
            _ => Err(CensusError::invalid_parameter("label_format", selector)),
        }
    }
}

impl fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelFormat::Rgba => write!(f, "rgba"),
            LabelFormat::Hex => write!(f, "hex"),
        }
    }
}
