//! Color ramps.
//!
//! This module provides the RGB color model, gradient segments and the
//! composition of segments into a flat, ordered ramp of band colors.

pub mod builder;
pub mod color;
pub mod segment;
pub mod swatch;

pub use builder::build_ramp;
pub use color::Color;
pub use segment::{Segment, SegmentSpec};
pub use swatch::{render_swatch, save_swatch};
