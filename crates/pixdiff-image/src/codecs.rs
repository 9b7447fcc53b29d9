/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! PPM goes through `pixdiff-ppm`, PNG and JPEG through the `image` crate.
//! Formats are recognised by their magic bytes when decoding and by the
//! last three characters of the path when saving.
use std::path::Path;

use pixdiff_core::bytestream::{ByteIoError, ByteReader, ByteReaderTrait, ByteWriterTrait};
use pixdiff_core::log::trace;
use pixdiff_core::options::{DecoderOptions, EncoderOptions};
use pixdiff_core::pixel_buffer::PixelBuffer;

use crate::codecs::ppm::PpmImageEncoder;
use crate::codecs::raster::{RasterDecoder, RasterEncoder, RasterFormat};
use crate::errors::ImageErrors;
use crate::traits::{DecoderTrait, EncoderTrait};

pub mod ppm;
pub mod raster;

/// Longest magic signature we look at
const MAX_MAGIC_LEN: usize = 8;

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    /// Binary Portable Pixel Map
    PPM,
    /// Portable Network Graphics
    PNG,
    /// Joint Photographic Experts Group
    JPEG,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    /// Guess the format of an image from its first bytes
    ///
    /// See [`guess_format`]
    pub fn guess_format(bytes: &[u8]) -> ImageFormat {
        guess_format(bytes)
    }

    /// Return the format to use for a three letter file extension
    ///
    /// Matching is case sensitive
    pub fn encoder_for_extension<P: AsRef<str>>(extension: P) -> Option<ImageFormat> {
        match extension.as_ref() {
            "ppm" => Some(ImageFormat::PPM),
            "png" => Some(ImageFormat::PNG),
            "jpg" => Some(ImageFormat::JPEG),
            _ => None
        }
    }

    pub fn has_encoder(self) -> bool {
        self != ImageFormat::Unknown
    }

    /// Create a decoder for this format reading from `data`
    pub fn decoder_with_options<'a, T>(
        &self, data: T, options: DecoderOptions
    ) -> Result<Box<dyn DecoderTrait + 'a>, ImageErrors>
    where
        T: ByteReaderTrait + 'a
    {
        match self {
            ImageFormat::PPM => Ok(Box::new(pixdiff_ppm::PpmDecoder::new_with_options(
                data, options
            ))),
            ImageFormat::PNG => Ok(Box::new(RasterDecoder::new_with_options(
                data,
                RasterFormat::Png,
                options
            ))),
            ImageFormat::JPEG => Ok(Box::new(RasterDecoder::new_with_options(
                data,
                RasterFormat::Jpeg,
                options
            ))),
            ImageFormat::Unknown => Err(ImageErrors::ImageDecoderNotImplemented(*self))
        }
    }

    /// Encode `image` in this format into `sink`
    ///
    /// Returns the number of bytes written
    pub fn encode<T: ByteWriterTrait>(
        &self, image: &PixelBuffer, options: EncoderOptions, sink: T
    ) -> Result<usize, ImageErrors> {
        trace!("Encoding image as {:?}", self);

        match self {
            ImageFormat::PPM => PpmImageEncoder::new().encode(image, sink),
            ImageFormat::PNG => {
                RasterEncoder::new_with_options(RasterFormat::Png, options).encode(image, sink)
            }
            ImageFormat::JPEG => {
                RasterEncoder::new_with_options(RasterFormat::Jpeg, options).encode(image, sink)
            }
            ImageFormat::Unknown => Err(ImageErrors::NoEncoderForFormat(*self))
        }
    }
}

/// Guess the format of an image based on it's magic bytes
///
/// # Arguments
/// - bytes: The first bytes of the encoded image, eight bytes suffice
///
/// # Returns
/// - The image format, [`ImageFormat::Unknown`] if none of the
///   supported signatures match
pub fn guess_format(bytes: &[u8]) -> ImageFormat {
    let magic_bytes: [(&[u8], ImageFormat); 3] = [
        (&[137, 80, 78, 71, 13, 10, 26, 10], ImageFormat::PNG),
        // Of course with jpg we need to relax our definition of what is a jpeg
        // the best identifier would be 0xFF,0xd8 0xff but nop, some images exist
        // which do not have that
        (&[0xff, 0xd8], ImageFormat::JPEG),
        (b"P6", ImageFormat::PPM)
    ];

    for (magic, format) in magic_bytes {
        if bytes.starts_with(magic) {
            return format;
        }
    }
    ImageFormat::Unknown
}

/// Peek the signature of a stream and return the format together with
/// the stream rewound to where it started
///
/// The signature bytes are read and then chained back in front of
/// the source, so the decoder sees the whole stream
pub(crate) fn guess_stream_format<T: ByteReaderTrait>(
    src: T
) -> Result<(ImageFormat, PeekedReader<T>), ImageErrors> {
    let mut reader = ByteReader::new(src);
    let mut magic = [0; MAX_MAGIC_LEN];
    let len = reader.read_up_to(&mut magic)?;

    let format = guess_format(&magic[..len]);
    trace!("Guessed format {:?} from {} signature bytes", format, len);

    Ok((
        format,
        PeekedReader {
            magic,
            len,
            position: 0,
            rest: reader.consume()
        }
    ))
}

/// A reader which replays a few peeked bytes before
/// continuing with the source they were taken from
pub(crate) struct PeekedReader<T: ByteReaderTrait> {
    magic:    [u8; MAX_MAGIC_LEN],
    len:      usize,
    position: usize,
    rest:     T
}

impl<T: ByteReaderTrait> ByteReaderTrait for PeekedReader<T> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        if self.position < self.len {
            let pending = &self.magic[self.position..self.len];
            let count = pending.len().min(buf.len());

            buf[..count].copy_from_slice(&pending[..count]);
            self.position += count;

            return Ok(count);
        }
        self.rest.read_bytes(buf)
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let mut filled = 0;

        while filled < buf.len() && self.position < self.len {
            filled += self.read_bytes(&mut buf[filled..])?;
        }
        self.rest.read_exact_bytes(&mut buf[filled..])
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        if self.position < self.len {
            return Ok(false);
        }
        self.rest.is_eof()
    }
}

/// Return the last three characters of `path`, the extension
/// used to pick an encoder
///
/// # Errors
/// [`ImageErrors::InvalidExtension`] when the path is shorter than five
/// characters, is not valid UTF-8, or does not have a `.` four characters
/// from the end
pub fn extension_from_path(path: &Path) -> Result<&str, ImageErrors> {
    let invalid = || ImageErrors::InvalidExtension(path.to_string_lossy().into_owned());

    let path_str = path.to_str().ok_or_else(invalid)?;
    let len = path_str.len();

    if len < 5 || path_str.as_bytes()[len - 4] != b'.' {
        return Err(invalid());
    }
    path_str.get(len - 3..).ok_or_else(invalid)
}
