/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel difference heatmaps
//!
//! Two images of the same size are compared pixel by pixel, the difference
//! of a pixel being the sum of the absolute differences of its three
//! channels (`0..=765`). Differences are normalized against the largest one
//! and inverted, so identical pixels come out white and the most different
//! pixels black:
//!
//! ```text
//! value = trunc(255 * (1 - diff / max_diff))
//! ```
//! Every output pixel is gray, `(value, value, value)`.
//!
//! When no pixel differs (`max_diff == 0`) the heatmap is all white.
use pixdiff_core::log::{debug, log_enabled, trace, Level};
use pixdiff_core::pixel_buffer::{BufferErrors, PixelBuffer};
use pixdiff_image::errors::ImageErrors;
use pixdiff_image::traits::OperationsTrait;

/// Heatmap value for pixels that do not differ
const WHITE: u8 = 255;

/// Compare `image` against a reference image, replacing it
/// with the difference heatmap
///
/// Both images must have the same dimensions
pub struct PixelDifferenceHeatmap<'src> {
    image: &'src PixelBuffer
}

impl<'src> PixelDifferenceHeatmap<'src> {
    /// Create a new heatmap operation comparing against `image`
    pub fn new(image: &'src PixelBuffer) -> PixelDifferenceHeatmap<'src> {
        PixelDifferenceHeatmap { image }
    }

    /// Return the heatmap of the reference image against `other`
    /// as a new buffer
    ///
    /// # Errors
    /// [`ImageErrors::DimensionsMisMatch`] if the dimensions differ
    pub fn generate(&self, other: &PixelBuffer) -> Result<PixelBuffer, ImageErrors> {
        heatmap(self.image, other)
    }
}

impl<'src> OperationsTrait for PixelDifferenceHeatmap<'src> {
    fn name(&self) -> &'static str {
        "Pixel Difference Heatmap"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        *image = self.generate(image)?;
        Ok(())
    }
}

/// Sum of the absolute channel differences of two pixels
///
/// Ranges from `0` for identical pixels to `765` for black against white
#[inline]
pub fn pixel_difference(a: [u8; 3], b: [u8; 3]) -> u16 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| u16::from(x.abs_diff(*y)))
        .sum()
}

/// Generate the difference heatmap of two images
///
/// # Errors
/// [`ImageErrors::DimensionsMisMatch`] if the images differ in width or
/// height, no output is produced in that case
pub fn heatmap(first: &PixelBuffer, second: &PixelBuffer) -> Result<PixelBuffer, ImageErrors> {
    if first.dimensions() != second.dimensions() {
        return Err(ImageErrors::DimensionsMisMatch(
            first.dimensions(),
            second.dimensions()
        ));
    }
    let (width, height) = first.dimensions();

    let mut differences = Vec::new();
    differences
        .try_reserve_exact(first.pixels().len())
        .map_err(|_| BufferErrors::AllocationFailure(first.pixels().len() * 2))?;
    differences.extend(
        first
            .pixels()
            .iter()
            .zip(second.pixels())
            .map(|(a, b)| pixel_difference(*a, *b))
    );

    let max_diff = differences.iter().copied().max().unwrap_or(0);
    debug!("Maximum pixel difference: {}", max_diff);

    let mut output = PixelBuffer::fill(width, height, [WHITE; 3])?;

    if max_diff == 0 {
        debug!("Images are identical, heatmap is white");
        return Ok(output);
    }

    let max = f32::from(max_diff);

    for (out, diff) in output.pixels_mut().iter_mut().zip(&differences) {
        let value = (255.0 * (1.0 - f32::from(*diff) / max)) as u8;
        *out = [value; 3];
    }

    if log_enabled!(Level::Trace) {
        let identical = differences.iter().filter(|d| **d == 0).count();
        trace!("{} of {} pixels are identical", identical, differences.len());
    }

    Ok(output)
}
