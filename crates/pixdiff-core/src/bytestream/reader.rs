/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

pub use crate::bytestream::reader::cursor::ByteCursor;
use crate::bytestream::ByteReaderTrait;

mod cursor;
mod std_readers;

/// Errors arising from the byte readers and writers
pub enum ByteIoError {
    /// The underlying reader or writer failed at the OS level
    StdIoError(std::io::Error),
    // requested, available
    NotEnoughBytes(usize, usize),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// A byte reader which keeps track of how many bytes
/// it has handed out
///
/// The position is counted here rather than asked from the
/// source since sources like `BufReader<Stdin>` cannot seek.
pub struct ByteReader<T: ByteReaderTrait> {
    inner:    T,
    position: u64
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader {
            inner:    source,
            position: 0
        }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }
    /// Number of bytes read from the source so far
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }

    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        self.inner.is_eof()
    }

    /// Read a single byte, or return an error if the
    /// stream is exhausted
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let mut buf = [0];
        self.inner.read_exact_bytes(&mut buf)?;
        self.position += 1;
        Ok(buf[0])
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Fill as much of `buf` as the stream allows, returning
    /// the number of bytes read.
    ///
    /// Unlike [`read_exact_bytes`](Self::read_exact_bytes) running out of
    /// bytes is not an error, a short count is returned instead.
    pub fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let read = self.inner.read_bytes(&mut buf[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
        }
        self.position += filled as u64;

        Ok(filled)
    }

    /// Append everything left in the stream to `buf`, returning
    /// how many bytes were appended
    pub fn read_to_end(&mut self, buf: &mut Vec<u8>) -> Result<usize, ByteIoError> {
        let mut scratch = [0_u8; 4096];
        let start = buf.len();

        loop {
            let read = self.inner.read_bytes(&mut scratch)?;
            if read == 0 {
                break;
            }
            buf.try_reserve(read)
                .map_err(|_| ByteIoError::Generic("Cannot grow buffer"))?;
            buf.extend_from_slice(&scratch[..read]);
        }
        let appended = buf.len() - start;
        self.position += appended as u64;

        Ok(appended)
    }

    /// Read and discard everything left in the stream, returning
    /// how many bytes were discarded
    pub fn skip_remaining(&mut self) -> Result<usize, ByteIoError> {
        let mut scratch = [0_u8; 4096];
        let mut skipped = 0;

        loop {
            let read = self.inner.read_bytes(&mut scratch)?;
            if read == 0 {
                break;
            }
            skipped += read;
        }
        self.position += skipped as u64;

        Ok(skipped)
    }
}
