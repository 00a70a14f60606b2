//! Error types for the two boundaries that can fail.
//!
//! - [`SourceError`] - the host-supplied file map could not be read
//! - [`ConfigError`] - the viewer configuration is invalid

use thiserror::Error;

/// Errors reading the `path -> content` file map.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Input is not valid JSON
    #[error("file map is not valid JSON: {0}")]
    InvalidJson(String),
    /// JSON was valid but not an object of strings
    #[error("file map must be an object of path to text, {0}")]
    InvalidShape(String),
}

/// Errors loading the viewer configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// TOML syntax or type error
    #[error("invalid viewer config: {0}")]
    Parse(String),
    /// `min_width` is larger than `max_width`
    #[error("sidebar min_width ({min}) exceeds max_width ({max})")]
    InvertedBounds { min: f64, max: f64 },
    /// `default_width` is outside `[min_width, max_width]`
    #[error("sidebar default_width ({width}) is outside {min}..={max}")]
    WidthOutOfBounds { width: f64, min: f64, max: f64 },
    /// `tab_size` of zero
    #[error("display tab_size must be at least 1")]
    ZeroTabSize,
}
