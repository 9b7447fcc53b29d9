/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Generated sample images
use pixdiff_core::pixel_buffer::{BufferErrors, PixelBuffer};

/// Width of [`striped_sample`]
pub const SAMPLE_WIDTH: usize = 600;
/// Height of [`striped_sample`]
pub const SAMPLE_HEIGHT: usize = 400;

pub const STRIPE_YELLOW: [u8; 3] = [255, 225, 0];
pub const STRIPE_BLACK: [u8; 3] = [0, 0, 0];

/// The 600x400 yellow and black striped test image
///
/// Four equal horizontal runs, yellow, black, yellow, black.
pub fn striped_sample() -> Result<PixelBuffer, BufferErrors> {
    striped(SAMPLE_WIDTH, SAMPLE_HEIGHT, STRIPE_YELLOW, STRIPE_BLACK)
}

/// Split the pixels, in row major order, into four runs alternating
/// between `first` and `second`
///
/// Pixel `i` belongs to run `(i * 4) / (width * height)`, so runs only
/// line up with rows when the height is a multiple of four.
pub fn striped(
    width: usize, height: usize, first: [u8; 3], second: [u8; 3]
) -> Result<PixelBuffer, BufferErrors> {
    let mut image = PixelBuffer::fill(width, height, second)?;
    // fits, the buffer holds width*height*3 bytes
    let resolution = width * height;

    for run in [0, 2] {
        let start = (run * resolution).div_ceil(4);
        let end = ((run + 1) * resolution).div_ceil(4);

        image.pixels_mut()[start..end].fill(first);
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use crate::samples::{striped, striped_sample, STRIPE_BLACK, STRIPE_YELLOW};

    #[test]
    fn sample_has_four_runs() {
        let image = striped_sample().unwrap();
        let pixels = image.pixels();
        let quarter = 600 * 400 / 4;

        assert_eq!(image.dimensions(), (600, 400));
        assert!(pixels[..quarter].iter().all(|p| *p == STRIPE_YELLOW));
        assert!(pixels[quarter..2 * quarter].iter().all(|p| *p == STRIPE_BLACK));
        assert!(pixels[2 * quarter..3 * quarter].iter().all(|p| *p == STRIPE_YELLOW));
        assert!(pixels[3 * quarter..].iter().all(|p| *p == STRIPE_BLACK));
        // quarters of 400 rows are whole rows
        assert_eq!(image.get(599, 99), Some(STRIPE_YELLOW));
        assert_eq!(image.get(0, 100), Some(STRIPE_BLACK));
    }

    #[test]
    fn uneven_runs_follow_pixel_index() {
        let (a, b) = ([1, 1, 1], [2, 2, 2]);
        // resolution 6, runs are i*4/6 = 0,0,1,2,2,3
        let image = striped(3, 2, a, b).unwrap();

        assert_eq!(image.pixels(), &[a, a, b, a, a, b]);
    }

    #[test]
    fn empty_striped_image() {
        assert!(striped(0, 7, [1; 3], [2; 3]).unwrap().pixels().is_empty());
    }
}
