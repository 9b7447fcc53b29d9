/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An owned RGB raster
//!
//! [`PixelBuffer`] is the single image representation shared by the codecs
//! and the image processing routines. Pixels are stored row major, row 0
//! from left to right, then row 1 and so on, with three 8-bit channels per
//! pixel.
//!
//! The buffer always upholds `pixels().len() == width * height`, a buffer
//! with zero width or height is valid and holds no pixels.
use core::fmt::{Debug, Display, Formatter};

/// Errors raised when constructing a pixel buffer
pub enum BufferErrors {
    /// The provided storage does not match the dimensions
    /// (expected, found)
    LengthMismatch(usize, usize),
    /// `width * height * 3` does not fit in a `usize`
    /// (width, height)
    DimensionsTooLarge(usize, usize),
    /// The allocator could not provide storage for the
    /// given number of bytes
    AllocationFailure(usize)
}

impl Debug for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferErrors::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Buffer length mismatch, expected {expected} elements but found {found}"
                )
            }
            BufferErrors::DimensionsTooLarge(width, height) => {
                writeln!(f, "Dimensions {width}x{height} overflow the addressable size")
            }
            BufferErrors::AllocationFailure(size) => {
                writeln!(f, "Could not allocate {size} bytes for the pixel buffer")
            }
        }
    }
}

impl Display for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for BufferErrors {}

/// Number of pixels for a `width` x `height` image, making sure
/// the interleaved byte length fits a usize
pub fn checked_pixel_count(width: usize, height: usize) -> Result<usize, BufferErrors> {
    width
        .checked_mul(height)
        .filter(|count| count.checked_mul(3).is_some())
        .ok_or(BufferErrors::DimensionsTooLarge(width, height))
}

/// A contiguous, row major RGB raster
#[derive(Clone, Eq, PartialEq)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<[u8; 3]>
}

impl PixelBuffer {
    /// Create an all black buffer
    pub fn new(width: usize, height: usize) -> Result<PixelBuffer, BufferErrors> {
        PixelBuffer::fill(width, height, [0, 0, 0])
    }

    /// Create a buffer with every pixel set to `rgb`
    pub fn fill(width: usize, height: usize, rgb: [u8; 3]) -> Result<PixelBuffer, BufferErrors> {
        let count = checked_pixel_count(width, height)?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| BufferErrors::AllocationFailure(count * 3))?;
        pixels.resize(count, rgb);

        Ok(PixelBuffer {
            width,
            height,
            pixels
        })
    }

    /// Wrap already laid out pixels
    ///
    /// # Errors
    /// [`BufferErrors::LengthMismatch`] if `pixels.len() != width * height`
    pub fn from_pixels(
        width: usize, height: usize, pixels: Vec<[u8; 3]>
    ) -> Result<PixelBuffer, BufferErrors> {
        let count = checked_pixel_count(width, height)?;

        if pixels.len() != count {
            return Err(BufferErrors::LengthMismatch(count, pixels.len()));
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels
        })
    }

    /// Create a buffer from interleaved `R,G,B,R,G,B..` bytes
    ///
    /// # Errors
    /// [`BufferErrors::LengthMismatch`] if `raw.len() != width * height * 3`
    pub fn from_raw(width: usize, height: usize, raw: Vec<u8>) -> Result<PixelBuffer, BufferErrors> {
        let count = checked_pixel_count(width, height)?;

        if raw.len() != count * 3 {
            return Err(BufferErrors::LengthMismatch(count * 3, raw.len()));
        }
        let mut buffer = PixelBuffer::new(width, height)?;
        buffer.as_bytes_mut().copy_from_slice(&raw);

        Ok(buffer)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Pixels in row major order
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [[u8; 3]] {
        &mut self.pixels
    }

    /// The pixels as interleaved `R,G,B` bytes, `width * height * 3` long
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.pixels.as_flattened_mut()
    }

    /// Return the pixel at column `x`, row `y` or `None` if
    /// the coordinate lies outside the image
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Consume the buffer returning interleaved `R,G,B` bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_flattened()
    }
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
