/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Represents a PPM image decoder and encoder
use pixdiff_core::bytestream::{ByteReaderTrait, ByteWriterTrait};
use pixdiff_core::pixel_buffer::PixelBuffer;
pub use pixdiff_ppm::{PpmDecodeErrors, PpmDecoder, PpmEncodeErrors, PpmEncoder};

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::traits::{DecoderTrait, EncoderTrait};

impl<T: ByteReaderTrait> DecoderTrait for PpmDecoder<T> {
    fn decode(&mut self) -> Result<PixelBuffer, ImageErrors> {
        Ok(PpmDecoder::decode(self)?)
    }

    fn decode_headers(&mut self) -> Result<(), ImageErrors> {
        Ok(PpmDecoder::decode_headers(self)?)
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        PpmDecoder::dimensions(self)
    }

    fn name(&self) -> &'static str {
        "PPM Decoder"
    }
}

/// The PPM encoder behind [`EncoderTrait`]
#[derive(Copy, Clone, Default)]
pub struct PpmImageEncoder;

impl PpmImageEncoder {
    pub fn new() -> PpmImageEncoder {
        PpmImageEncoder
    }
}

impl EncoderTrait for PpmImageEncoder {
    fn name(&self) -> &'static str {
        "PPM Encoder"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::PPM
    }

    fn encode<T: ByteWriterTrait>(
        &mut self, image: &PixelBuffer, sink: T
    ) -> Result<usize, ImageErrors> {
        Ok(PpmEncoder::new(image).encode(sink)?)
    }
}
