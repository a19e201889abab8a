//! Strategies for choosing a ramp color per element.
//!
//! A mapper turns the marker attribute of each matched element into an index
//! into the ramp. Whole-run failures are returned as the outer error, while
//! failures specific to one element are reported next to its handle.

pub mod common;
pub mod index;
pub mod range;

use crate::error::Result;
use crate::store::{ElementHandle, ElementStore};

pub use index::IndexMapper;
pub use range::RangeMapper;

/// Ramp index resolved for one element, or why it could not be resolved
pub type Resolution = (ElementHandle, Result<usize>);

/// Trait for value-to-index mapping strategies
pub trait Mapper {
    /// Resolve a ramp index for each element, in the given order
    fn resolve(
        &self,
        store: &dyn ElementStore,
        marker: &str,
        elements: &[ElementHandle],
        ramp_len: usize,
    ) -> Result<Vec<Resolution>>;

    /// Get the name of this mapping strategy
    fn name(&self) -> &str;
}

/// Get a mapper by name
pub fn get_mapper(name: &str) -> Result<Box<dyn Mapper>> {
    match name.to_lowercase().as_str() {
        "index" => Ok(Box::new(IndexMapper)),
        "range" => Ok(Box::new(RangeMapper)),
        _ => Err(crate::error::RampError::InvalidParameter {
            param: "mode".to_string(),
            message: format!("Unknown mapping mode: {}", name),
        }),
    }
}
