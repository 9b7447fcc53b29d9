/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG and JPEG support through the `image` crate
//!
//! Only layout is adapted here, images come out as interleaved 8-bit RGB
//! regardless of how they were stored and go in the same way.
use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader, Limits};
use pixdiff_core::bytestream::{ByteReader, ByteReaderTrait, ByteWriter, ByteWriterTrait};
use pixdiff_core::log::{debug, trace};
use pixdiff_core::options::{DecoderOptions, EncoderOptions};
use pixdiff_core::pixel_buffer::{BufferErrors, PixelBuffer};

use crate::codecs::{extension_from_path, guess_stream_format, ImageFormat};
use crate::errors::ImageErrors;
use crate::io::create_file;
use crate::traits::{DecoderTrait, EncoderTrait};

/// Formats handled by the raster codec
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RasterFormat {
    Png,
    Jpeg
}

impl RasterFormat {
    /// Pick the raster format from the last three characters of the path
    ///
    /// Only `png` and `jpg` are accepted, matched case sensitively.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RasterFormat, ImageErrors> {
        let path = path.as_ref();

        match extension_from_path(path)? {
            "png" => Ok(RasterFormat::Png),
            "jpg" => Ok(RasterFormat::Jpeg),
            _ => Err(ImageErrors::InvalidExtension(
                path.to_string_lossy().into_owned()
            ))
        }
    }

    pub const fn image_format(self) -> ImageFormat {
        match self {
            RasterFormat::Png => ImageFormat::PNG,
            RasterFormat::Jpeg => ImageFormat::JPEG
        }
    }

    const fn codec_format(self) -> image::ImageFormat {
        match self {
            RasterFormat::Png => image::ImageFormat::Png,
            RasterFormat::Jpeg => image::ImageFormat::Jpeg
        }
    }
}

/// A PNG or JPEG decoder
///
/// The whole source is buffered in memory the first time
/// headers or pixels are requested.
pub struct RasterDecoder<T: ByteReaderTrait> {
    reader:      ByteReader<T>,
    format:      RasterFormat,
    options:     DecoderOptions,
    data:        Vec<u8>,
    read_source: bool,
    dimensions:  Option<(usize, usize)>
}

impl<T: ByteReaderTrait> RasterDecoder<T> {
    pub fn new(data: T, format: RasterFormat) -> RasterDecoder<T> {
        RasterDecoder::new_with_options(data, format, DecoderOptions::default())
    }

    pub fn new_with_options(
        data: T, format: RasterFormat, options: DecoderOptions
    ) -> RasterDecoder<T> {
        RasterDecoder {
            reader: ByteReader::new(data),
            format,
            options,
            data: Vec::new(),
            read_source: false,
            dimensions: None
        }
    }

    fn fill_data(&mut self) -> Result<(), ImageErrors> {
        if !self.read_source {
            let size = self.reader.read_to_end(&mut self.data)?;
            trace!("Buffered {} bytes of {:?} data", size, self.format);
            self.read_source = true;
        }
        Ok(())
    }

    fn image_reader(&self) -> ImageReader<Cursor<&[u8]>> {
        let mut limits = Limits::default();
        limits.max_image_width = Some(u32::try_from(self.options.get_max_width()).unwrap_or(u32::MAX));
        limits.max_image_height =
            Some(u32::try_from(self.options.get_max_height()).unwrap_or(u32::MAX));

        let mut reader = ImageReader::with_format(Cursor::new(&self.data[..]), self.format.codec_format());
        reader.limits(limits);
        reader
    }
}

impl<T: ByteReaderTrait> DecoderTrait for RasterDecoder<T> {
    fn decode(&mut self) -> Result<PixelBuffer, ImageErrors> {
        self.decode_headers()?;

        let decoded = self.image_reader().decode()?;
        debug!("Decoded {:?} image with color type {:?}", self.format, decoded.color());

        let rgb = decoded.into_rgb8();
        let (width, height) = rgb.dimensions();

        Ok(PixelBuffer::from_raw(
            width as usize,
            height as usize,
            rgb.into_raw()
        )?)
    }

    fn decode_headers(&mut self) -> Result<(), ImageErrors> {
        if self.dimensions.is_some() {
            return Ok(());
        }
        self.fill_data()?;

        let (width, height) = self.image_reader().into_dimensions()?;
        self.dimensions = Some((width as usize, height as usize));

        Ok(())
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        self.dimensions
    }

    fn name(&self) -> &'static str {
        match self.format {
            RasterFormat::Png => "PNG Decoder",
            RasterFormat::Jpeg => "JPEG Decoder"
        }
    }
}

/// A PNG or JPEG encoder
///
/// JPEG output uses [`EncoderOptions::get_quality`], PNG is lossless and
/// ignores it.
pub struct RasterEncoder {
    format:  RasterFormat,
    options: EncoderOptions
}

impl RasterEncoder {
    pub fn new(format: RasterFormat) -> RasterEncoder {
        RasterEncoder::new_with_options(format, EncoderOptions::default())
    }

    pub fn new_with_options(format: RasterFormat, options: EncoderOptions) -> RasterEncoder {
        RasterEncoder { format, options }
    }
}

impl EncoderTrait for RasterEncoder {
    fn name(&self) -> &'static str {
        match self.format {
            RasterFormat::Png => "PNG Encoder",
            RasterFormat::Jpeg => "JPEG Encoder"
        }
    }

    fn format(&self) -> ImageFormat {
        self.format.image_format()
    }

    fn encode<T: ByteWriterTrait>(
        &mut self, image: &PixelBuffer, sink: T
    ) -> Result<usize, ImageErrors> {
        let (width, height) = image.dimensions();
        let too_large = || ImageErrors::BufferErrors(BufferErrors::DimensionsTooLarge(width, height));

        let codec_width = u32::try_from(width).map_err(|_| too_large())?;
        let codec_height = u32::try_from(height).map_err(|_| too_large())?;

        let mut encoded = Vec::new();

        match self.format {
            RasterFormat::Png => PngEncoder::new(&mut encoded).write_image(
                image.as_bytes(),
                codec_width,
                codec_height,
                ExtendedColorType::Rgb8
            )?,
            RasterFormat::Jpeg => {
                let quality = self.options.get_quality();
                trace!("Writing JPEG at quality {}", quality);

                JpegEncoder::new_with_quality(&mut encoded, quality).write_image(
                    image.as_bytes(),
                    codec_width,
                    codec_height,
                    ExtendedColorType::Rgb8
                )?
            }
        }

        let mut writer = ByteWriter::new(sink);
        writer.write_all(&encoded)?;
        writer.flush()?;

        Ok(writer.bytes_written())
    }
}

/// Decode a PNG or JPEG file into an RGB buffer
///
/// The format is taken from the file contents, not its name.
pub fn decode_raster<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<PixelBuffer, ImageErrors> {
    let file = std::io::BufReader::new(std::fs::File::open(path)?);
    let (format, reader) = guess_stream_format(file)?;

    let raster_format = match format {
        ImageFormat::PNG => RasterFormat::Png,
        ImageFormat::JPEG => RasterFormat::Jpeg,
        other => return Err(ImageErrors::ImageDecoderNotImplemented(other))
    };
    RasterDecoder::new_with_options(reader, raster_format, options).decode()
}

/// Encode an RGB buffer to a PNG or JPEG file, creating
/// or truncating it
pub fn encode_raster<P: AsRef<Path>>(
    path: P, image: &PixelBuffer, format: RasterFormat, options: EncoderOptions
) -> Result<usize, ImageErrors> {
    let file = create_file(path)?;

    RasterEncoder::new_with_options(format, options).encode(image, file)
}

#[cfg(test)]
mod tests {
    use pixdiff_core::bytestream::ByteCursor;
    use pixdiff_core::options::DecoderOptions;
    use pixdiff_core::pixel_buffer::PixelBuffer;

    use crate::codecs::raster::{RasterDecoder, RasterEncoder, RasterFormat};
    use crate::errors::ImageErrors;
    use crate::traits::{DecoderTrait, EncoderTrait};

    #[test]
    fn raster_format_from_path() {
        assert_eq!(RasterFormat::from_path("out.png").unwrap(), RasterFormat::Png);
        assert_eq!(RasterFormat::from_path("out.jpg").unwrap(), RasterFormat::Jpeg);

        for path in ["out.PNG", "a.gif", "png", "abcpng", "a.ppm"] {
            assert!(
                matches!(RasterFormat::from_path(path), Err(ImageErrors::InvalidExtension(_))),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn png_in_memory_round_trip() {
        let pixels = (0..12_u8).map(|i| [i, i * 2, 255 - i]).collect();
        let image = PixelBuffer::from_pixels(4, 3, pixels).unwrap();

        let mut encoded = vec![];
        RasterEncoder::new(RasterFormat::Png)
            .encode(&image, &mut encoded)
            .unwrap();

        let mut decoder = RasterDecoder::new(ByteCursor::new(&encoded), RasterFormat::Png);
        decoder.decode_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((4, 3)));
        assert_eq!(decoder.decode().unwrap(), image);
    }

    #[test]
    fn jpeg_keeps_dimensions() {
        let image = PixelBuffer::fill(16, 8, [200, 100, 50]).unwrap();

        let mut encoded = vec![];
        RasterEncoder::new(RasterFormat::Jpeg)
            .encode(&image, &mut encoded)
            .unwrap();

        assert_eq!(&encoded[..2], &[0xff, 0xd8]);

        let decoded = RasterDecoder::new(ByteCursor::new(&encoded), RasterFormat::Jpeg)
            .decode()
            .unwrap();
        assert_eq!(decoded.dimensions(), (16, 8));
    }

    #[test]
    fn decoder_limits_apply_to_png() {
        let image = PixelBuffer::fill(40, 2, [9, 9, 9]).unwrap();

        let mut encoded = vec![];
        RasterEncoder::new(RasterFormat::Png)
            .encode(&image, &mut encoded)
            .unwrap();

        let options = DecoderOptions::default().set_max_width(32);
        let limited =
            RasterDecoder::new_with_options(ByteCursor::new(&encoded), RasterFormat::Png, options)
                .decode();
        assert!(matches!(limited, Err(ImageErrors::RasterErrors(_))));

        let options = DecoderOptions::default().set_max_width(40);
        let decoded =
            RasterDecoder::new_with_options(ByteCursor::new(&encoded), RasterFormat::Png, options)
                .decode()
                .unwrap();
        assert_eq!(decoded, image);
    }
}
