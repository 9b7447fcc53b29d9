/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Loading, saving and format dispatch for pixdiff images
//!
//! This crate ties the codecs together around
//! [`PixelBuffer`](pixdiff_core::pixel_buffer::PixelBuffer)
//!
//! - PPM (P6) through `pixdiff-ppm`
//! - PNG and JPEG through the `image` crate
//!
//! Formats are detected from magic bytes when reading and from the file
//! extension when saving.
//!
//! # Example
//! - Write the striped sample image and read it back
//! ```no_run
//! use pixdiff_image::errors::ImageErrors;
//! use pixdiff_image::{io, samples};
//!
//! fn main() -> Result<(), ImageErrors> {
//!     let image = samples::striped_sample()?;
//!     io::save(&image, "striped.png")?;
//!
//!     let decoded = io::open("striped.png")?;
//!     assert_eq!(decoded, image);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub use pixdiff_core;

pub mod codecs;
pub mod errors;
pub mod io;
pub mod samples;
mod serde;
pub mod traits;
