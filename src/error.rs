//! Error types for bandramp.
//!
//! Construction errors (colors, segments) surface immediately to the caller.
//! Mapping errors are reported per element and never abort an apply run,
//! except for `EmptyElementSet` and `EmptyRamp` which stop it before any write.

use thiserror::Error;

/// The main error type for bandramp operations.
#[derive(Error, Debug)]
pub enum RampError {
    /// Hex color string that is not `#RRGGBB`
    #[error("Malformed color '{input}': {message}")]
    MalformedColor { input: String, message: String },

    /// Segment with fewer than one band
    #[error("Invalid segment: band count must be at least 1, got {band_count}")]
    InvalidSegment { band_count: usize },

    /// Mapping against a ramp with no colors
    #[error("Ramp is empty")]
    EmptyRamp,

    /// No elements to derive a value range from
    #[error("No elements with a numeric '{marker}' attribute were found")]
    EmptyElementSet { marker: String },

    /// Index mapping outside the ramp
    #[error("Index {index} is out of range for a ramp of {len} colors")]
    IndexOutOfRange { index: i64, len: usize },

    /// Marker attribute missing or not numeric
    #[error("Invalid '{marker}' attribute value: {value:?}")]
    InvalidAttribute {
        marker: String,
        value: Option<String>,
    },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Swatch rendering errors
    #[error("Image generation error: {message}")]
    Image { message: String },
}

/// Convenience type alias for Results with RampError
pub type Result<T> = std::result::Result<T, RampError>;
