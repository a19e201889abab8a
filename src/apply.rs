//! Style applicator.
//!
//! Resolves a ramp color for every element matching a marker and writes the
//! background and contrasting foreground through the element store. Writes
//! are unconditional overwrites in query order.

use std::time::Instant;

use crate::error::{RampError, Result};
use crate::logging::{
    log_apply_stats, log_error, log_operation_end, log_operation_start, log_skipped_element,
};
use crate::mapping::{IndexMapper, Mapper, RangeMapper};
use crate::ramp::Color;
use crate::store::{ElementHandle, ElementStore, BACKGROUND_PROPERTY, FOREGROUND_PROPERTY};

/// An element that received no styles, and why
#[derive(Debug)]
pub struct SkippedElement {
    pub handle: ElementHandle,
    pub error: RampError,
}

/// Outcome of one apply run
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Elements returned by the marker query
    pub matched: usize,
    /// Elements that received both style writes
    pub styled: usize,
    /// Elements left untouched
    pub skipped: Vec<SkippedElement>,
}

impl ApplyReport {
    /// True when every matched element was styled
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Apply a ramp using the marker value as a direct ramp index
pub fn apply_colors_by_index(
    store: &mut dyn ElementStore,
    marker: &str,
    ramp: &[Color],
) -> Result<ApplyReport> {
    apply_colors(store, marker, ramp, &IndexMapper)
}

/// Apply a ramp by binning the marker value across its observed range.
///
/// Fails without writing anything if no element carries a numeric marker.
pub fn apply_colors_by_range(
    store: &mut dyn ElementStore,
    marker: &str,
    ramp: &[Color],
) -> Result<ApplyReport> {
    apply_colors(store, marker, ramp, &RangeMapper)
}

/// Apply a ramp with any mapping strategy
pub fn apply_colors(
    store: &mut dyn ElementStore,
    marker: &str,
    ramp: &[Color],
    mapper: &dyn Mapper,
) -> Result<ApplyReport> {
    let start = Instant::now();
    log_operation_start(
        "apply_colors",
        Some(&format!(
            "marker={} mode={} ramp_len={}",
            marker,
            mapper.name(),
            ramp.len()
        )),
    );

    if ramp.is_empty() {
        let err = RampError::EmptyRamp;
        log_error(&err, "apply_colors");
        return Err(err);
    }

    let elements = store.query_elements(marker);
    if elements.is_empty() {
        tracing::warn!(marker = marker, "No elements matched marker");
    }

    let resolutions = mapper
        .resolve(&*store, marker, &elements, ramp.len())
        .map_err(|e| {
            log_error(&e, "apply_colors");
            e
        })?;

    let mut report = ApplyReport {
        matched: elements.len(),
        ..Default::default()
    };

    for (handle, resolution) in resolutions {
        match resolution.and_then(|index| {
            ramp.get(index).copied().ok_or(RampError::IndexOutOfRange {
                index: index as i64,
                len: ramp.len(),
            })
        }) {
            Ok(color) => {
                store.write_style(handle, BACKGROUND_PROPERTY, &color.to_hex_string());
                store.write_style(handle, FOREGROUND_PROPERTY, color.contrasting_foreground());
                report.styled += 1;
            }
            Err(error) => {
                log_skipped_element(handle, marker, &error);
                report.skipped.push(SkippedElement { handle, error });
            }
        }
    }

    log_apply_stats(
        marker,
        mapper.name(),
        ramp.len(),
        report.matched,
        report.styled,
    );
    log_operation_end("apply_colors", start, report.is_complete());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Document, Element};

    /// Store that records every write, to check ordering and count
    #[derive(Default)]
    struct RecordingStore {
        doc: Document,
        writes: Vec<(ElementHandle, String, String)>,
    }

    impl ElementStore for RecordingStore {
        fn query_elements(&self, marker: &str) -> Vec<ElementHandle> {
            self.doc.query_elements(marker)
        }

        fn read_attribute(&self, handle: ElementHandle, marker: &str) -> Option<String> {
            self.doc.read_attribute(handle, marker)
        }

        fn write_style(&mut self, handle: ElementHandle, property: &str, value: &str) {
            self.writes
                .push((handle, property.to_string(), value.to_string()));
        }
    }

    fn ramp() -> Vec<Color> {
        vec![Color::BLACK, Color::new(128, 128, 128), Color::WHITE]
    }

    fn store(marker: &str, values: &[&str]) -> RecordingStore {
        RecordingStore {
            doc: Document::new(
                values
                    .iter()
                    .map(|v| Element::with_attribute(marker, v))
                    .collect(),
            ),
            writes: Vec::new(),
        }
    }

    #[test]
    fn test_two_writes_per_element_in_order() {
        let mut store = store("data-value", &["0", "100"]);
        let report = apply_colors_by_range(&mut store, "data-value", &ramp()).unwrap();

        assert_eq!(report.styled, 2);
        assert_eq!(
            store.writes,
            vec![
                (ElementHandle(0), "background-color".to_string(), "#000000".to_string()),
                (ElementHandle(0), "color".to_string(), "white".to_string()),
                (ElementHandle(1), "background-color".to_string(), "#ffffff".to_string()),
                (ElementHandle(1), "color".to_string(), "black".to_string()),
            ]
        );
    }

    #[test]
    fn test_range_with_no_elements_writes_nothing() {
        let mut store = store("data-value", &[]);
        let err = apply_colors_by_range(&mut store, "data-value", &ramp()).unwrap_err();
        assert!(matches!(err, RampError::EmptyElementSet { .. }));
        assert!(store.writes.is_empty());
    }

    #[test]
    fn test_index_out_of_range_skips_only_that_element() {
        let mut store = store("data-band", &["5", "1"]);
        let report = apply_colors_by_index(&mut store, "data-band", &ramp()).unwrap();

        assert_eq!(report.matched, 2);
        assert_eq!(report.styled, 1);
        assert!(!report.is_complete());
        assert_eq!(report.skipped[0].handle, ElementHandle(0));
        assert!(matches!(
            report.skipped[0].error,
            RampError::IndexOutOfRange { index: 5, len: 3 }
        ));
        assert!(store.writes.iter().all(|(h, _, _)| *h == ElementHandle(1)));
        assert_eq!(store.writes.len(), 2);
    }

    #[test]
    fn test_empty_ramp_is_rejected() {
        let mut store = store("data-band", &["0"]);
        assert!(matches!(
            apply_colors_by_index(&mut store, "data-band", &[]),
            Err(RampError::EmptyRamp)
        ));
        assert!(store.writes.is_empty());
    }

    #[test]
    fn test_index_with_no_elements_is_a_no_op() {
        let mut store = store("data-band", &[]);
        let report = apply_colors_by_index(&mut store, "data-band", &ramp()).unwrap();
        assert_eq!(report.matched, 0);
        assert!(store.writes.is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut doc = Document::new(vec![
            Element::with_attribute("v", "1"),
            Element::with_attribute("v", "2"),
        ]);
        apply_colors_by_range(&mut doc, "v", &ramp()).unwrap();
        let first = doc.clone();
        apply_colors_by_range(&mut doc, "v", &ramp()).unwrap();
        assert_eq!(doc, first);
    }
}
