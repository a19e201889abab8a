//! Index mapping.
//!
//! The marker attribute holds a precomputed 0-based ramp index.

use super::{common, Mapper, Resolution};
use crate::error::{RampError, Result};
use crate::store::{ElementHandle, ElementStore};

/// Uses the marker value directly as a ramp index
pub struct IndexMapper;

impl Mapper for IndexMapper {
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

        Ok(elements
            .iter()
            .map(|&handle| {
                let index = common::read_integer(store, handle, marker)
                    .and_then(|index| common::checked_index(index, ramp_len));
                (handle, index)
            })
            .collect())
    }

    fn name(&self) -> &str {
        "index"
    }
}
