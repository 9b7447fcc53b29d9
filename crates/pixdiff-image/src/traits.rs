/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Main image traits
//!
//! These are the seams every codec and image operation plugs into
use pixdiff_core::bytestream::ByteWriterTrait;
use pixdiff_core::log::trace;
use pixdiff_core::pixel_buffer::PixelBuffer;

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this class
pub trait DecoderTrait {
    /// Decode a buffer already in memory
    ///
    /// The buffer to be decoded is the one passed
    /// to the decoder when initializing the decoder
    fn decode(&mut self) -> Result<PixelBuffer, ImageErrors>;

    /// Read image headers, making [`dimensions`](Self::dimensions)
    /// available without decoding pixels
    fn decode_headers(&mut self) -> Result<(), ImageErrors>;

    /// Get width and height of the image
    ///
    /// `None` until headers are decoded
    fn dimensions(&self) -> Option<(usize, usize)>;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;
}

/// Encapsulates an image encoder
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// The format this encoder produces
    fn format(&self) -> ImageFormat;

    /// Encode and write to a sink, returning
    /// how many bytes were written
    fn encode<T: ByteWriterTrait>(
        &mut self, image: &PixelBuffer, sink: T
    ) -> Result<usize, ImageErrors>;
}

/// This encapsulates an image operation.
///
/// Operations modify the image passed to them in place
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// The operation itself, called by [`execute`](Self::execute)
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors>;

    /// Execute the operation on the image
    ///
    /// On error the image is left untouched
    fn execute(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let start = std::time::Instant::now();
        trace!("Running operation {}", self.name());

        self.execute_impl(image)?;

        trace!(
            "Finished running {} in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}
