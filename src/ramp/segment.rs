//! One leg of a gradient.
//!
//! A segment linearly interpolates each channel from its start color to its
//! end color over a fixed number of bands.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::{RampError, Result};

/// A gradient leg between two colors producing `band_count` evenly spaced colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SegmentSpec", into = "SegmentSpec")]
pub struct Segment {
    start: Color,
    end: Color,
    band_count: usize,
}

/// Serialized form of a segment, validated on conversion
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SegmentSpec {
    /// First band color
    pub start: Color,
    /// Last band color (ignored when `bands` is 1)
    pub end: Color,
    /// Number of bands
    pub bands: usize,
}

impl Segment {
    /// Create a segment; fails if `band_count` is zero
    pub fn new(start: Color, end: Color, band_count: usize) -> Result<Self> {
        if band_count < 1 {
            return Err(RampError::InvalidSegment { band_count });
        }
        Ok(Self {
            start,
            end,
            band_count,
        })
    }

    /// A single-band segment that injects one fixed color
    pub fn solid(color: Color) -> Self {
        Self {
            start: color,
            end: color,
            band_count: 1,
        }
    }

    pub fn start(&self) -> Color {
        self.start
    }

    pub fn end(&self) -> Color {
        self.end
    }

    pub fn band_count(&self) -> usize {
        self.band_count
    }

    /// Compute the band colors, first equal to `start`, last equal to `end`.
    ///
    /// A single-band segment yields only the start color. The sequence is
    /// recomputed on every call.
    pub fn compute_bands(&self) -> Vec<Color> {
        if self.band_count == 1 {
            return vec![self.start];
        }

        let reds = interpolate_channel(self.start.r(), self.end.r(), self.band_count);
        let greens = interpolate_channel(self.start.g(), self.end.g(), self.band_count);
        let blues = interpolate_channel(self.start.b(), self.end.b(), self.band_count);

        reds.into_iter()
            .zip(greens)
            .zip(blues)
            .map(|((r, g), b)| Color::new(r, g, b))
            .collect()
    }
}

/// Accumulate `(end - start) / (bands - 1)` from `start`, rounding each step.
///
/// `abs` strips the negative zero that rounding can leave when ramping down to 0.
fn interpolate_channel(start: i32, end: i32, bands: usize) -> Vec<i32> {
    let increment = (end as f64 - start as f64) / (bands - 1) as f64;
    let mut value = start as f64;
    let mut channel = Vec::with_capacity(bands);
    for _ in 0..bands {
        channel.push(value.round().abs() as i32);
        value += increment;
    }
    channel
}

impl TryFrom<SegmentSpec> for Segment {
    type Error = RampError;

    fn try_from(spec: SegmentSpec) -> Result<Self> {
        Segment::new(spec.start, spec.end, spec.bands)
    }
}

impl From<Segment> for SegmentSpec {
    fn from(segment: Segment) -> Self {
        SegmentSpec {
            start: segment.start,
            end: segment.end,
            bands: segment.band_count,
        }
    }
}
