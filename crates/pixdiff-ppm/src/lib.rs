/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A binary Portable Pixmap (P6) decoder and encoder
//!
//! Only the 8-bit RGB flavour of the format is handled, i.e files whose
//! header reads
//!
//! ```text
//! P6
//! <width> <height>
//! 255
//! ```
//! followed by `width * height * 3` bytes of row major RGB samples.
//!
//! # Example
//! ```
//! use pixdiff_core::bytestream::ByteCursor;
//! use pixdiff_core::pixel_buffer::PixelBuffer;
//! use pixdiff_ppm::{PpmDecoder, PpmEncoder};
//!
//! let image = PixelBuffer::fill(2, 2, [255, 0, 0]).unwrap();
//!
//! let mut encoded = vec![];
//! PpmEncoder::new(&image).encode(&mut encoded).unwrap();
//!
//! let decoded = PpmDecoder::new(ByteCursor::new(&encoded)).decode().unwrap();
//! assert_eq!(decoded, image);
//! ```
#![forbid(unsafe_code)]

pub use pixdiff_core;

pub use crate::decoder::*;
pub use crate::encoder::*;
pub use crate::errors::*;

mod decoder;
mod encoder;
mod errors;
