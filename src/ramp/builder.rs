//! Ramp composition.

use super::color::Color;
use super::segment::Segment;

/// Concatenate the bands of each segment, in order.
///
/// Boundary colors shared by adjacent segments are kept twice; the ramp is
/// not deduplicated or checked for continuity.
pub fn build_ramp(segments: &[Segment]) -> Vec<Color> {
    let mut ramp = Vec::with_capacity(segments.iter().map(Segment::band_count).sum());
    for segment in segments {
        ramp.extend(segment.compute_bands());
    }
    ramp
}
