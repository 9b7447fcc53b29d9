/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use pixdiff_core::bytestream::ByteIoError;
use pixdiff_core::pixel_buffer::BufferErrors;

/// Errors possible when decoding a PPM file
pub enum PpmDecodeErrors {
    /// The stream does not start with the `P6` token,
    /// carries whatever token was found instead
    BadMagic(String),
    /// Width or height is not a non-negative decimal integer
    BadDimensions(String),
    /// Maximum value is not `255`
    UnsupportedMaxValue(String),
    /// The stream ended before the named header field
    TruncatedHeader(&'static str),
    /// Fewer payload bytes than the header promised
    /// (expected, found)
    TruncatedData(usize, usize),
    /// Dimensions exceed the configured limits
    /// (limit, found)
    LargeDimensions(usize, usize),
    /// Bytes found after the pixel payload in strict mode
    TrailingData(usize),
    /// Could not allocate the given number of bytes
    AllocationFailure(usize),
    IoErrors(ByteIoError)
}

impl Debug for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadMagic(found) => {
                writeln!(f, "Bad magic bytes, expected P6 but found {found:?}")
            }
            Self::BadDimensions(found) => {
                writeln!(f, "Invalid image dimension {found:?}")
            }
            Self::UnsupportedMaxValue(found) => {
                writeln!(
                    f,
                    "Unsupported maximum value {found:?}, only 255 is supported"
                )
            }
            Self::TruncatedHeader(field) => {
                writeln!(f, "Header ended before the {field} field")
            }
            Self::TruncatedData(expected, found) => {
                writeln!(
                    f,
                    "Truncated pixel data, expected {expected} bytes but found {found}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value of at most {expected} but found {found}"
                )
            }
            Self::TrailingData(count) => {
                writeln!(f, "Found {count} bytes after the pixel data")
            }
            Self::AllocationFailure(size) => {
                writeln!(f, "Could not allocate {size} bytes for the image")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PpmDecodeErrors {}

impl From<ByteIoError> for PpmDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        PpmDecodeErrors::IoErrors(value)
    }
}

impl From<BufferErrors> for PpmDecodeErrors {
    fn from(value: BufferErrors) -> Self {
        match value {
            BufferErrors::LengthMismatch(expected, found) => {
                PpmDecodeErrors::TruncatedData(expected, found)
            }
            BufferErrors::DimensionsTooLarge(width, height) => {
                PpmDecodeErrors::LargeDimensions(usize::MAX / 3, width.saturating_mul(height))
            }
            BufferErrors::AllocationFailure(size) => PpmDecodeErrors::AllocationFailure(size)
        }
    }
}

/// Errors occurring during encoding
pub enum PpmEncodeErrors {
    IoErrors(ByteIoError)
}

impl Debug for PpmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PpmEncodeErrors::IoErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PpmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PpmEncodeErrors {}

impl From<ByteIoError> for PpmEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        PpmEncodeErrors::IoErrors(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::PpmDecodeErrors;

    #[test]
    fn large_dimensions_message_is_inclusive() {
        let message = format!("{:?}", PpmDecodeErrors::LargeDimensions(10, 11));
        assert!(message.contains("at most 10"), "{message}");
        assert!(message.contains("found 11"), "{message}");
    }
}
