//! Range mapping.
//!
//! Marker values are binned linearly between the minimum and maximum observed
//! across all matched elements, one bin per ramp color. The range is sampled
//! fresh on every call.

use tracing::debug;

use super::{common, Mapper, Resolution};
use crate::error::{RampError, Result};
use crate::store::{ElementHandle, ElementStore};

/// Bins a continuous marker value into the ramp's bands
pub struct RangeMapper;

/// Observed value range and bin width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeContext {
    pub min: f64,
    pub max: f64,
    /// `None` when every value lands in bin 0 (one color, or `min == max`)
    pub step: Option<f64>,
}

impl RangeContext {
    /// Derive the range from a set of values; `None` if there are none
    pub fn from_values(values: impl IntoIterator<Item = f64>, ramp_len: usize) -> Option<Self> {
        let (min, max) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })?;

        let step = if ramp_len > 1 && max > min {
            Some((max - min) / (ramp_len - 1) as f64)
        } else {
            None
        };

        Some(Self { min, max, step })
    }

    /// Bin a value, clamped to the ramp
    pub fn index_of(&self, value: f64, ramp_len: usize) -> usize {
        match self.step {
            Some(step) => common::clamp_index(((value - self.min) / step).floor(), ramp_len),
            None => 0,
        }
    }
}

impl Mapper for RangeMapper {
    fn resolve(
        &self,
        store: &dyn ElementStore,
        marker: &str,
        elements: &[ElementHandle],
        ramp_len: usize,
    ) -> Result<Vec<Resolution>> {
        if ramp_len == 0 {
            return Err(RampError::EmptyRamp);
        }

        let values: Vec<(ElementHandle, Result<f64>)> = elements
            .iter()
            .map(|&handle| (handle, common::read_numeric(store, handle, marker)))
            .collect();

        let context = RangeContext::from_values(
            values.iter().filter_map(|(_, v)| v.as_ref().ok().copied()),
            ramp_len,
        )
        .ok_or_else(|| RampError::EmptyElementSet {
            marker: marker.to_string(),
        })?;

        debug!(
            marker = marker,
            min = context.min,
            max = context.max,
            step = ?context.step,
            "Sampled value range"
        );

        Ok(values
            .into_iter()
            .map(|(handle, value)| (handle, value.map(|v| context.index_of(v, ramp_len))))
            .collect())
    }

    fn name(&self) -> &str {
        "range"
    }
}
