//! RGB color value.
//!
//! Channels are stored exactly as given; clamping to `[0, 255]` only happens
//! when the color is rendered as a hex string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RampError, Result};

/// Brightness above which a black foreground is used
const CONTRAST_THRESHOLD: f64 = 125.0;

/// An immutable RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: i32,
    g: i32,
    b: i32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color from three channel values
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Parse a color from a `#RRGGBB` string (case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let malformed = |message: &str| RampError::MalformedColor {
            input: hex.to_string(),
            message: message.to_string(),
        };

        let bytes = hex.as_bytes();
        if bytes.len() != 7 {
            return Err(malformed("expected 7 characters in the form #RRGGBB"));
        }
        if bytes[0] != b'#' {
            return Err(malformed("expected a leading '#'"));
        }
        if !bytes[1..].iter().all(u8::is_ascii_hexdigit) {
            return Err(malformed("invalid hex digits"));
        }

        // All seven bytes are ASCII at this point, so slicing is safe
        let channel = |offset: usize| {
            u8::from_str_radix(&hex[offset..offset + 2], 16)
                .map(i32::from)
                .map_err(|e| malformed(&e.to_string()))
        };

        Ok(Self::new(channel(1)?, channel(3)?, channel(5)?))
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn g(&self) -> i32 {
        self.g
    }

    pub fn b(&self) -> i32 {
        self.b
    }

    /// Render as a lowercase `#rrggbb` string, clamping each channel to `[0, 255]`
    pub fn to_hex_string(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b)
        )
    }

    /// Perceived brightness using the W3C weights (299, 587, 114)
    pub fn brightness(&self) -> f64 {
        (299.0 * self.r as f64 + 587.0 * self.g as f64 + 114.0 * self.b as f64) / 1000.0
    }

    /// `"black"` on bright backgrounds, `"white"` otherwise
    pub fn contrasting_foreground(&self) -> &'static str {
        if self.brightness() > CONTRAST_THRESHOLD {
            "black"
        } else {
            "white"
        }
    }

    /// Channels clamped to bytes, for raster output
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b),
        ]
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = RampError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = RampError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}
