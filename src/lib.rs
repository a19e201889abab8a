//! # bandramp
//!
//! Multi-stop color ramps mapped onto data-bearing elements.
//!
//! A ramp is built by concatenating gradient segments, each producing a fixed
//! number of evenly spaced bands. Elements selected by a marker attribute are
//! then colored either by using the marker as a direct ramp index, or by
//! binning the marker value across the observed range. Every styled element
//! also gets a black or white foreground chosen for legibility.
//!
//! ## Architecture
//!
//! - **Ramp**: color model, segment interpolation and ramp composition
//! - **Mapping**: index and range strategies resolving a ramp index per element
//! - **Store**: the element collaborator, with an in-memory JSON document
//! - **Apply**: writes background and foreground styles through the store
//!
//! ```
//! use bandramp::{apply_colors_by_range, build_ramp, Color, Document, Element, Segment};
//!
//! let ramp = build_ramp(&[Segment::new(Color::BLACK, Color::WHITE, 3).unwrap()]);
//! let mut doc = Document::new(vec![
//!     Element::with_attribute("data-value", "0"),
//!     Element::with_attribute("data-value", "100"),
//! ]);
//! let report = apply_colors_by_range(&mut doc, "data-value", &ramp).unwrap();
//! assert_eq!(report.styled, 2);
//! ```

pub mod apply;
pub mod config;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod ramp;
pub mod store;

pub use apply::{
    apply_colors, apply_colors_by_index, apply_colors_by_range, ApplyReport, SkippedElement,
};
pub use config::Config;
pub use error::{RampError, Result};
pub use logging::{
    generate_operation_id, init_tracing, log_apply_stats, log_error, log_operation_end,
    log_operation_start, log_skipped_element, log_timed_operation,
};
pub use mapping::{get_mapper, Mapper};
pub use ramp::{build_ramp, Color, Segment};
pub use store::{Document, Element, ElementHandle, ElementStore};
