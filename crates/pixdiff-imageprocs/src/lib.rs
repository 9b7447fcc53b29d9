/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image comparison routines for `pixdiff-image`
//!
//! It implements the `OperationsTrait` defined by pixdiff-image.
//!
//! # Example
//! - Compare an image against a brighter copy of itself
//! ```
//! use pixdiff_core::pixel_buffer::PixelBuffer;
//! use pixdiff_image::traits::OperationsTrait;
//! use pixdiff_imageprocs::heatmap::PixelDifferenceHeatmap;
//!
//! let reference = PixelBuffer::fill(100, 100, [10, 10, 10]).unwrap();
//! let mut image = PixelBuffer::fill(100, 100, [20, 20, 20]).unwrap();
//!
//! PixelDifferenceHeatmap::new(&reference).execute(&mut image).unwrap();
//! // every pixel differs by the maximum difference
//! assert!(image.as_bytes().iter().all(|x| *x == 0));
//! ```
#![forbid(unsafe_code)]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod heatmap;
