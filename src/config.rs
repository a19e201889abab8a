//! Configuration management for bandramp.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RampError, Result};
use crate::ramp::{Color, Segment, SegmentSpec};

/// Command-line arguments for bandramp
#[derive(Parser, Debug)]
#[command(name = "bandramp")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON document whose elements are styled
    pub document: PathBuf,

    /// Path to JSON configuration file
    #[arg(short, long, env = "BANDRAMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Attribute used to select elements and read their values
    #[arg(short, long, env = "BANDRAMP_MARKER")]
    pub marker: Option<String>,

    /// Mapping mode (index, range)
    #[arg(long, env = "BANDRAMP_MODE")]
    pub mode: Option<String>,

    /// Write the styled document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write a PNG preview of the ramp
    #[arg(long)]
    pub swatch: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BANDRAMP_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Ramp definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RampConfig {
    /// Segments in ramp order
    #[serde(default = "default_segments")]
    pub segments: Vec<SegmentSpec>,
}

/// Apply configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyConfig {
    /// Marker attribute name
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Mapping mode
    #[serde(default = "default_mode")]
    pub mode: String,
}

/// Swatch preview configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwatchConfig {
    /// Width of each band in pixels
    #[serde(default = "default_band_width")]
    pub band_width: u32,

    /// Swatch height in pixels
    #[serde(default = "default_swatch_height")]
    pub height: u32,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ramp configuration
    #[serde(default)]
    pub ramp: RampConfig,

    /// Apply configuration
    #[serde(default)]
    pub apply: ApplyConfig,

    /// Swatch configuration
    #[serde(default)]
    pub swatch: SwatchConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Args)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args))
    }

    /// Build configuration from already-parsed arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(marker) = &args.marker {
            config.apply.marker = marker.clone();
        }
        if let Some(mode) = &args.mode {
            config.apply.mode = mode.clone();
        }
        if let Some(log_level) = &args.log_level {
            config.log_level = log_level.clone();
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.ramp = other.ramp;
        self.apply = other.apply;
        self.swatch = other.swatch;
        self.log_level = other.log_level;
    }

    /// Build the configured segments
    pub fn segments(&self) -> Result<Vec<Segment>> {
        self.ramp
            .segments
            .iter()
            .map(|&spec| Segment::try_from(spec))
            .collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.apply.marker.trim().is_empty() {
            return Err(RampError::Config {
                message: "Marker cannot be empty".to_string(),
            });
        }

        match self.apply.mode.to_lowercase().as_str() {
            "index" | "range" => {}
            _ => {
                return Err(RampError::Config {
                    message: format!(
                        "Invalid mapping mode: {}. Must be one of: index, range",
                        self.apply.mode
                    ),
                });
            }
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RampError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if self.ramp.segments.is_empty() {
            return Err(RampError::Config {
                message: "Ramp must have at least one segment".to_string(),
            });
        }

        if self.swatch.band_width == 0 || self.swatch.height == 0 {
            return Err(RampError::Config {
                message: "Swatch dimensions must be positive".to_string(),
            });
        }

        self.segments().map_err(|e| RampError::Config {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ramp: RampConfig::default(),
            apply: ApplyConfig::default(),
            swatch: SwatchConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            segments: default_segments(),
        }
    }
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            mode: default_mode(),
        }
    }
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            band_width: default_band_width(),
            height: default_swatch_height(),
        }
    }
}

// Default value functions for serde

/// Green to yellow to red, five bands each
fn default_segments() -> Vec<SegmentSpec> {
    let green = Color::new(0, 255, 0);
    let yellow = Color::new(255, 255, 0);
    let red = Color::new(255, 0, 0);
    vec![
        SegmentSpec {
            start: green,
            end: yellow,
            bands: 5,
        },
        SegmentSpec {
            start: yellow,
            end: red,
            bands: 5,
        },
    ]
}

fn default_marker() -> String {
    "data-value".to_string()
}

fn default_mode() -> String {
    "range".to_string()
}

fn default_band_width() -> u32 {
    32
}

fn default_swatch_height() -> u32 {
    32
}

fn default_log_level() -> String {
    "info".to_string()
}
