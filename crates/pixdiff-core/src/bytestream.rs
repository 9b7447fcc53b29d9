/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! Decoders read through [`ByteReader`], which counts consumed bytes and
//! forwards to anything implementing [`ByteReaderTrait`]. Encoders write
//! through [`ByteWriter`] into any [`ByteWriterTrait`] sink.
//!
//! Implementations are provided for in-memory buffers ([`ByteCursor`],
//! [`std::io::Cursor`], `Vec<u8>`) and for buffered files
//! ([`std::io::BufReader`], [`std::io::BufWriter`]).
pub use reader::{ByteCursor, ByteIoError, ByteReader};
pub use traits::{ByteReaderTrait, ByteWriterTrait};
pub use writer::ByteWriter;

mod reader;
mod traits;
mod writer;
