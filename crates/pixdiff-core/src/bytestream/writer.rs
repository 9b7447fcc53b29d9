/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteWriterTrait};

mod std_writer;

/// A byte writer which counts the bytes it has
/// pushed into the sink
pub struct ByteWriter<T: ByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ByteWriterTrait> ByteWriter<T> {
    pub fn new(data: T) -> ByteWriter<T> {
        ByteWriter {
            buffer:        data,
            bytes_written: 0
        }
    }

    /// Write all bytes from `buf` into the sink
    #[inline]
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Ask the sink to make room for `size` more bytes
    ///
    /// Sinks that cannot reserve treat this as a no-op
    pub fn reserve(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.buffer.reserve_capacity(size)
    }

    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.buffer.flush_bytes()
    }

    #[inline(always)]
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Consume the writer returning the inner sink
    pub fn inner(self) -> T {
        self.buffer
    }
}
