/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use pixdiff_core::bytestream::ByteIoError;
use pixdiff_core::pixel_buffer::BufferErrors;
use pixdiff_ppm::{PpmDecodeErrors, PpmEncodeErrors};

use crate::codecs::ImageFormat;

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    PpmDecodeErrors(PpmDecodeErrors),
    PpmEncodeErrors(PpmEncodeErrors),
    /// Errors from the png and jpeg codecs
    RasterErrors(image::ImageError),
    BufferErrors(BufferErrors),
    IoErrors(ByteIoError),
    /// Images given to an operation differ in size
    /// (expected, found)
    DimensionsMisMatch((usize, usize), (usize, usize)),
    /// The path does not end in a supported three letter extension
    InvalidExtension(String),
    NoEncoderForFormat(ImageFormat),
    ImageDecoderNotImplemented(ImageFormat),
    GenericString(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PpmDecodeErrors(err) => {
                writeln!(f, "PPM decoding failed: {err:?}")
            }
            Self::PpmEncodeErrors(err) => {
                writeln!(f, "PPM encoding failed: {err:?}")
            }
            Self::RasterErrors(err) => {
                writeln!(f, "Raster codec failed: {err}")
            }
            Self::BufferErrors(err) => {
                writeln!(f, "{err:?}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::InvalidExtension(path) => {
                writeln!(
                    f,
                    "Cannot determine the format of {path:?}, expected a png or jpg extension"
                )
            }
            Self::NoEncoderForFormat(format) => {
                writeln!(f, "No encoder for format {format:?}")
            }
            Self::ImageDecoderNotImplemented(format) => {
                writeln!(f, "No decoder for format {format:?}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

impl From<PpmDecodeErrors> for ImageErrors {
    fn from(value: PpmDecodeErrors) -> Self {
        Self::PpmDecodeErrors(value)
    }
}

impl From<PpmEncodeErrors> for ImageErrors {
    fn from(value: PpmEncodeErrors) -> Self {
        Self::PpmEncodeErrors(value)
    }
}

impl From<image::ImageError> for ImageErrors {
    fn from(value: image::ImageError) -> Self {
        Self::RasterErrors(value)
    }
}

impl From<BufferErrors> for ImageErrors {
    fn from(value: BufferErrors) -> Self {
        Self::BufferErrors(value)
    }
}

impl From<ByteIoError> for ImageErrors {
    fn from(value: ByteIoError) -> Self {
        Self::IoErrors(value)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(ByteIoError::from(value))
    }
}
