/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixdiff_core::bytestream::{ByteWriter, ByteWriterTrait};
use pixdiff_core::log::trace;
use pixdiff_core::pixel_buffer::PixelBuffer;

use crate::errors::PpmEncodeErrors;

/// The only maximum value we write
const PPM_MAX_VALUE: u8 = 255;

/// A PPM encoder
///
/// Writes the image as a binary `P6` pixmap with a maximum value of 255.
pub struct PpmEncoder<'a> {
    image: &'a PixelBuffer
}

impl<'a> PpmEncoder<'a> {
    /// Create a new encoder which will encode the specified image
    pub fn new(image: &'a PixelBuffer) -> PpmEncoder<'a> {
        PpmEncoder { image }
    }

    fn header(&self) -> String {
        let (width, height) = self.image.dimensions();

        format!("P6\n{width} {height}\n{PPM_MAX_VALUE}\n")
    }

    /// Encode the image into `sink`, returning the number of
    /// bytes written
    ///
    /// The sink is flushed before returning.
    pub fn encode<T: ByteWriterTrait>(&self, sink: T) -> Result<usize, PpmEncodeErrors> {
        let header = self.header();
        let pixels = self.image.as_bytes();

        let mut writer = ByteWriter::new(sink);

        writer.reserve(header.len() + pixels.len())?;
        writer.write_all(header.as_bytes())?;
        writer.write_all(pixels)?;
        writer.flush()?;

        trace!("Wrote {} bytes of PPM data", writer.bytes_written());

        Ok(writer.bytes_written())
    }
}

#[cfg(test)]
mod tests {
    use pixdiff_core::pixel_buffer::PixelBuffer;

    use crate::PpmEncoder;

    #[test]
    fn empty_image_is_header_only() {
        let image = PixelBuffer::new(0, 5).unwrap();
        let mut out = vec![];

        let written = PpmEncoder::new(&image).encode(&mut out).unwrap();

        assert_eq!(out, b"P6\n0 5\n255\n");
        assert_eq!(written, out.len());
    }
}
