/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufWriter, Write};

use crate::bytestream::{ByteIoError, ByteWriterTrait};

impl ByteWriterTrait for &mut Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.try_reserve(size)
            .map_err(|_| ByteIoError::Generic("Cannot reserve space for output"))
    }
}

impl<W: Write> ByteWriterTrait for BufWriter<W> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.write_all(buf).map_err(ByteIoError::from)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        self.flush().map_err(ByteIoError::from)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        // we can't really reserve space in a file
        Ok(())
    }
}

impl<W: Write> ByteWriterTrait for &mut BufWriter<W> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        (**self).write_all_bytes(buf)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        (**self).flush_bytes()
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        (**self).reserve_capacity(size)
    }
}
