//! PNG previews of a ramp.
//!
//! Each band is drawn as a solid vertical stripe, left to right in ramp order.

use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;
use tracing::debug;

use super::color::Color;
use crate::error::{RampError, Result};

/// Render a ramp as a strip of `band_width` x `height` stripes
pub fn render_swatch(ramp: &[Color], band_width: u32, height: u32) -> Result<RgbaImage> {
    if ramp.is_empty() {
        return Err(RampError::EmptyRamp);
    }
    if band_width == 0 || height == 0 {
        return Err(RampError::InvalidParameter {
            param: "swatch".to_string(),
            message: format!(
                "Swatch dimensions must be positive, got band width {} and height {}",
                band_width, height
            ),
        });
    }

    let width = u32::try_from(ramp.len())
        .ok()
        .and_then(|bands| bands.checked_mul(band_width))
        .ok_or_else(|| RampError::Image {
            message: format!("Swatch for {} bands is too wide", ramp.len()),
        })?;

    let img = ImageBuffer::from_fn(width, height, |x, _| {
        let [r, g, b] = ramp[(x / band_width) as usize].to_rgb8();
        Rgba([r, g, b, 255])
    });

    debug!(width = width, height = height, bands = ramp.len(), "Rendered swatch");
    Ok(img)
}

/// Render a swatch and write it to `path` (format from the extension)
pub fn save_swatch(ramp: &[Color], band_width: u32, height: u32, path: &Path) -> Result<()> {
    let img = render_swatch(ramp, band_width, height)?;
    img.save(path).map_err(|e| RampError::Image {
        message: format!("Failed to write swatch to {}: {}", path.display(), e),
    })
}
