//! Common utilities for mapping strategies.

use crate::error::{RampError, Result};
use crate::store::{ElementHandle, ElementStore};

/// Read the marker attribute of an element as a finite number
pub fn read_numeric(store: &dyn ElementStore, handle: ElementHandle, marker: &str) -> Result<f64> {
    let raw = store.read_attribute(handle, marker);
    raw.as_deref()
        .map(str::trim)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| RampError::InvalidAttribute {
            marker: marker.to_string(),
            value: raw,
        })
}

/// Read the marker attribute of an element as an integer
pub fn read_integer(store: &dyn ElementStore, handle: ElementHandle, marker: &str) -> Result<i64> {
    let raw = store.read_attribute(handle, marker);
    raw.as_deref()
        .map(str::trim)
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| RampError::InvalidAttribute {
            marker: marker.to_string(),
            value: raw,
        })
}

/// Clamp a fractional index to `[0, len - 1]`
pub fn clamp_index(index: f64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if index.is_nan() || index <= 0.0 {
        0
    } else if index >= last as f64 {
        last
    } else {
        index as usize
    }
}

/// Check an integer index against the ramp length
pub fn checked_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(RampError::IndexOutOfRange { index, len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Document, Element};

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(-1.0, 10), 0);
        assert_eq!(clamp_index(5.5, 10), 5);
        assert_eq!(clamp_index(9.0000001, 10), 9);
        assert_eq!(clamp_index(15.0, 10), 9);
        assert_eq!(clamp_index(f64::NAN, 10), 0);
    }

    #[test]
    fn test_checked_index() {
        assert_eq!(checked_index(0, 3).unwrap(), 0);
        assert_eq!(checked_index(2, 3).unwrap(), 2);
        assert!(matches!(
            checked_index(5, 3),
            Err(RampError::IndexOutOfRange { index: 5, len: 3 })
        ));
        assert!(checked_index(-1, 3).is_err());
    }

    #[test]
    fn test_read_numeric() {
        let doc = Document::new(vec![
            Element::with_attribute("v", " 2.5 "),
            Element::with_attribute("v", "abc"),
            Element::with_attribute("v", "inf"),
        ]);
        assert_eq!(read_numeric(&doc, ElementHandle(0), "v").unwrap(), 2.5);
        assert!(read_numeric(&doc, ElementHandle(1), "v").is_err());
        assert!(read_numeric(&doc, ElementHandle(2), "v").is_err());
        assert!(read_numeric(&doc, ElementHandle(0), "w").is_err());
    }

    #[test]
    fn test_read_integer() {
        let doc = Document::new(vec![
            Element::with_attribute("i", "4"),
            Element::with_attribute("i", "1.5"),
        ]);
        assert_eq!(read_integer(&doc, ElementHandle(0), "i").unwrap(), 4);
        assert!(matches!(
            read_integer(&doc, ElementHandle(1), "i"),
            Err(RampError::InvalidAttribute { .. })
        ));
    }
}
