/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all pixdiff libraries
//!
//! It currently contains
//!
//! - [`PixelBuffer`](pixel_buffer::PixelBuffer), the owned RGB raster every
//!   other crate reads and produces
//! - A bytestream reader and writer abstracting over in-memory buffers and
//!   buffered files
//! - Decoder and encoder options
//! - Logging macros which forward to the `log` crate when the `log` feature
//!   is enabled
//!
//! # Features
//!  - `log`: Route the [`log`](crate::log) macros to the `log` crate, the
//!     application is expected to install a logger.
#![forbid(unsafe_code)]
#![macro_use]

pub mod bytestream;
pub mod log;
pub mod options;
pub mod pixel_buffer;
