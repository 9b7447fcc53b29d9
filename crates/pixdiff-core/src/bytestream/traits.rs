/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing images in pixdiff
//!
//! This exposes the traits and implementations for readers
//! and writers used by the decoders and encoders.

use crate::bytestream::reader::ByteIoError;

/// The de-facto Input trait implemented for readers.
///
/// This provides the basic functions needed by the decoders with easy
/// support for extending it to multiple implementations.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer [`ByteCursor`](crate::bytestream::ByteCursor)
/// over [`Cursor`](std::io::Cursor), it answers [`is_eof`](Self::is_eof) and
/// [`read_exact_bytes`](Self::read_exact_bytes) without going through `std::io`.
pub trait ByteReaderTrait {
    /// Read bytes into `buf` returning how many bytes you have read or an error if one occurred
    ///
    /// This doesn't guarantee that buf will be filled with bytes, for such a guarantee see
    /// [`read_exact_bytes`](Self::read_exact_bytes)
    ///
    /// ## Returns
    ///  - `Ok(usize)` - Actual bytes read into the buffer, `0` at end of stream
    ///  - `Err()` - The error encountered when reading bytes for which we couldn't recover
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;

    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    ///  ## Errors
    /// In case of an error, the contents of `buf` are unspecified
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Report whether we are at the end of a stream.
    ///
    /// ## Warning
    /// For buffered files this may refill the internal buffer, which
    /// is a syscall, hence use it with care
    fn is_eof(&mut self) -> Result<bool, ByteIoError>;
}

impl<T: ByteReaderTrait + ?Sized> ByteReaderTrait for &mut T {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        (**self).read_bytes(buf)
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        (**self).read_exact_bytes(buf)
    }

    fn is_eof(&mut self) -> Result<bool, ByteIoError> {
        (**self).is_eof()
    }
}

/// The writer trait implemented for the pixdiff encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ByteWriterTrait {
    /// Write all bytes to the sink or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;

    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;

    /// A hint to tell the implementation how big of a size we expect the image to be
    /// An implementation like in memory `Vec` can use this to reserve additional memory to
    /// prevent reallocation when encoding
    ///
    /// If your implementation doesn't support such, e.g files, it's okay to return
    /// `Ok(())`
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}
