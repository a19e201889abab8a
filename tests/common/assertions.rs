//! Assertion utilities for testing.
//!
//! Band interpolation rounds per step, so endpoint checks allow a one-unit
//! difference per channel.

use bandramp::{Color, Document, ElementHandle};

/// Default per-channel tolerance
pub const DEFAULT_TOLERANCE: i32 = 1;

/// Assert that two colors match within `tolerance` on every channel.
///
/// # Panics
///
/// Panics if any channel differs by more than `tolerance` (default: 1).
pub fn assert_color_close(actual: Color, expected: Color, tolerance: Option<i32>) {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let diffs = [
        (actual.r() - expected.r()).abs(),
        (actual.g() - expected.g()).abs(),
        (actual.b() - expected.b()).abs(),
    ];

    assert!(
        diffs.iter().all(|&d| d <= tolerance),
        "Colors not close: actual = {}, expected = {}, diffs = {:?}, tolerance = {}",
        actual,
        expected,
        diffs,
        tolerance
    );
}

/// Assert the background and foreground written to an element
pub fn assert_styled(doc: &Document, handle: ElementHandle, background: &str, foreground: &str) {
    assert_eq!(
        doc.style(handle, "background-color"),
        Some(background),
        "background of element {}",
        handle
    );
    assert_eq!(
        doc.style(handle, "color"),
        Some(foreground),
        "foreground of element {}",
        handle
    );
}

/// Assert that an element carries no styles at all
pub fn assert_unstyled(doc: &Document, handle: ElementHandle) {
    let element = doc.element(handle).expect("element exists");
    assert!(
        element.style.is_empty(),
        "Element {} should be unstyled, has {:?}",
        handle,
        element.style
    );
}
