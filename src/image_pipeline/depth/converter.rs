//! In-place bit-depth rescaling to 8 bits per channel.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::{MonoImage, RgbImage};

/// Highest source depth whose divider `(1 << depth) - 1` fits a `u32`.
const MAX_BITS_PER_SAMPLE: u32 = 31;

/// Rescales raster samples from an N-bit range to the 8-bit range, in place.
///
/// Every sample `v` becomes `v * 255 / ((1 << depth) - 1)` using integer
/// multiply then integer divide, truncating toward zero. This is deliberately
/// not round-to-nearest. Samples above the declared range produce values
/// above 255; they are not clamped.
pub struct BitDepthConverter;

impl BitDepthConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert an RGB image to 8 bits per channel, updating `bits_per_sample`.
    pub fn convert_rgb(&self, image: &mut RgbImage) -> Result<()> {
        let divider = Self::divider(image.bits_per_sample)?;
        Self::check_len(image.expected_len(), image.data.len())?;

        debug!(
            "Converting RGB image {}x{} from {}-bit to 8-bit",
            image.width, image.height, image.bits_per_sample
        );

        Self::rescale(&mut image.data, divider);
        image.bits_per_sample = 8;
        Ok(())
    }

    /// Convert a monochrome image to 8 bits per sample, updating `bits_per_sample`.
    pub fn convert_mono(&self, image: &mut MonoImage) -> Result<()> {
        let divider = Self::divider(image.bits_per_sample)?;
        Self::check_len(image.expected_len(), image.data.len())?;

        debug!(
            "Converting mono image {}x{} from {}-bit to 8-bit",
            image.width, image.height, image.bits_per_sample
        );

        Self::rescale(&mut image.data, divider);
        image.bits_per_sample = 8;
        Ok(())
    }

    fn rescale(data: &mut [u32], divider: u32) {
        // u64 intermediate: v * 255 overflows u32 for samples above 24 bits.
        // Truncating division matches the original integer math exactly.
        for v in data.iter_mut() {
            *v = (u64::from(*v) * 255 / u64::from(divider)) as u32;
        }
    }

    fn divider(bits_per_sample: u32) -> Result<u32> {
        if bits_per_sample < 1 || bits_per_sample > MAX_BITS_PER_SAMPLE {
            return Err(ConversionError::InvalidBitDepth(bits_per_sample));
        }
        Ok((1u32 << bits_per_sample) - 1)
    }

    fn check_len(expected: usize, actual: usize) -> Result<()> {
        if actual != expected {
            return Err(ConversionError::BufferSizeMismatch { expected, actual });
        }
        Ok(())
    }
}

impl Default for BitDepthConverter {
    fn default() -> Self {
        Self::new()
    }
}
