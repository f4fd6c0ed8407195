//! Error types for the color_census library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for color_census operations
pub type Result<T> = std::result::Result<T, CensusError>;

/// Error types for the palette census pipeline
#[derive(Error, Debug)]
pub enum CensusError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Rendered chart could not be written to disk
    #[error("Failed to write chart to {}: {}", path.display(), message)]
    ChartWriteError {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CensusError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a chart write error with context
    pub fn chart_write<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ChartWriteError {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            CensusError::ImageLoadError { .. } => {
                "Could not load the image. Please check the path and file format and try again."
                    .to_string()
            }
            CensusError::InvalidParameter { parameter, .. } => {
                format!(
                    "The value given for '{}' is not usable. Check the allowed range or selector names.",
                    parameter
                )
            }
            CensusError::ConfigError { .. } => {
                "Could not read the configuration file. Please check that it is valid JSON."
                    .to_string()
            }
            CensusError::ChartWriteError { path, .. } => {
                format!(
                    "Could not save the chart to '{}'. Check that the directory exists and is writable.",
                    path.display()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = CensusError::invalid_parameter("bucket_size", 0);
        assert_eq!(err.to_string(), "Invalid parameter: bucket_size = 0");
    }

    #[test]
    fn test_image_load_carries_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CensusError::image_load("Failed to open image file: photo.jpg", io);
        assert!(err.to_string().contains("photo.jpg"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_user_message_names_parameter() {
        let err = CensusError::invalid_parameter("label_format", "violet");
        assert!(err.user_message().contains("label_format"));
    }
}
