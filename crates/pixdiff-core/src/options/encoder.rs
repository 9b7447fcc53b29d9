/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Options shared by the encoders in the pixdiff crates
///
/// PPM has nothing to configure, these are consumed by the
/// raster codec
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EncoderOptions {
    quality: u8
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self { quality: 100 }
    }
}

impl EncoderOptions {
    /// Get the quality for which the image will be encoded with
    ///
    ///  # Lossy
    /// - Higher quality means some images take longer to write and
    ///   are big but they look good
    ///
    /// - Lower quality means small images and low quality.
    pub const fn get_quality(&self) -> u8 {
        self.quality
    }

    /// Set quality of the image to be encoded
    ///
    /// Values are clamped to `1..=100`
    pub fn set_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }
}
