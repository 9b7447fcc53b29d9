/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Opening and saving images
//!
//! Reading detects the format from the first bytes of the stream, saving
//! picks it from the last three characters of the path (`ppm`, `png` or
//! `jpg`).
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use pixdiff_core::bytestream::{ByteReaderTrait, ByteWriterTrait};
use pixdiff_core::log::{info, trace};
use pixdiff_core::options::{DecoderOptions, EncoderOptions};
use pixdiff_core::pixel_buffer::PixelBuffer;

use crate::codecs::{extension_from_path, guess_stream_format, ImageFormat};
use crate::errors::ImageErrors;

/// Header level information about an encoded image
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width:  usize,
    pub height: usize
}

/// Open an encoded file for which the library has a decoder
///
/// See also [read] for reading from memory
pub fn open<P: AsRef<Path>>(file: P) -> Result<PixelBuffer, ImageErrors> {
    open_with_options(file, DecoderOptions::default())
}

/// Open an encoded file with the specified decoder options
///
/// # Example
///  -  Decode a file with strict mode enabled and only expect images with less
///     than 100 pixels in width
///
/// ```no_run
/// use pixdiff_core::options::DecoderOptions;
/// use pixdiff_image::io;
/// let options = DecoderOptions::default().set_strict_mode(true).set_max_width(100);
/// let image = io::open_with_options("/a/file.ppm", options).unwrap();
/// ```
pub fn open_with_options<P: AsRef<Path>>(
    file: P, options: DecoderOptions
) -> Result<PixelBuffer, ImageErrors> {
    let reader = std::io::BufReader::new(File::open(file)?);
    read(reader, options)
}

/// Decode an image from any byte source, detecting the format
/// from its signature
///
/// # Example
///```
/// use pixdiff_core::bytestream::ByteCursor;
/// use pixdiff_core::options::DecoderOptions;
/// use pixdiff_image::io;
///
/// let image = io::read(ByteCursor::new(b"P6 1 1 255 abc"), DecoderOptions::default()).unwrap();
/// assert_eq!(image.pixels(), &[[b'a', b'b', b'c']]);
///```
pub fn read<T>(src: T, options: DecoderOptions) -> Result<PixelBuffer, ImageErrors>
where
    T: ByteReaderTrait
{
    let (format, reader) = guess_stream_format(src)?;
    let mut decoder = format.decoder_with_options(reader, options)?;

    trace!("Decoding with {}", decoder.name());
    let image = decoder.decode()?;
    info!("Decoded {:?} image of {}x{}", format, image.width(), image.height());

    Ok(image)
}

/// Read the format and dimensions of an encoded file without
/// decoding pixels where the format allows it
pub fn probe<P: AsRef<Path>>(file: P, options: DecoderOptions) -> Result<ImageInfo, ImageErrors> {
    let reader = std::io::BufReader::new(File::open(file)?);
    let (format, reader) = guess_stream_format(reader)?;

    let mut decoder = format.decoder_with_options(reader, options)?;
    decoder.decode_headers()?;

    let (width, height) = decoder.dimensions().unwrap_or((0, 0));

    Ok(ImageInfo {
        format,
        width,
        height
    })
}

/// Save the image to a file and use the extension to
/// determine the format
///
/// The extension is the last three characters of the path, one of
/// `ppm`, `png` or `jpg`.
///
/// # Examples
///
/// ```no_run
/// use pixdiff_core::pixel_buffer::PixelBuffer;
/// use pixdiff_image::io;
///
/// let image = PixelBuffer::fill(100, 100, [128, 128, 128]).unwrap();
/// io::save(&image, "hello.jpg").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(image: &PixelBuffer, file: P) -> Result<(), ImageErrors> {
    save_with_options(image, file, EncoderOptions::default())
}

/// Save the image to a file with the given encoder options, using
/// the extension to determine the format
pub fn save_with_options<P: AsRef<Path>>(
    image: &PixelBuffer, file: P, options: EncoderOptions
) -> Result<(), ImageErrors> {
    let path = file.as_ref();
    let ext = extension_from_path(path)?;

    match ImageFormat::encoder_for_extension(ext) {
        Some(format) => save_to(image, path, format, options),
        None => Err(ImageErrors::InvalidExtension(
            path.to_string_lossy().into_owned()
        ))
    }
}

/// Save an image using a specified format to a file
///
/// The file is created, or truncated if it exists.
pub fn save_to<P: AsRef<Path>>(
    image: &PixelBuffer, file: P, format: ImageFormat, options: EncoderOptions
) -> Result<(), ImageErrors> {
    // reject before touching the file system
    if !format.has_encoder() {
        return Err(ImageErrors::NoEncoderForFormat(format));
    }
    let sink = create_file(file)?;
    let written = encode(image, format, options, sink)?;
    trace!("Wrote {} bytes", written);

    Ok(())
}

/// Encode to a generic sink an image of a specific format
///
/// # Returns
///  - The size of bytes written to sink or an error if it occurs
pub fn encode<T: ByteWriterTrait>(
    image: &PixelBuffer, format: ImageFormat, options: EncoderOptions, sink: T
) -> Result<usize, ImageErrors> {
    format.encode(image, options, sink)
}

/// Open a file for writing, creating it or truncating an existing one
pub(crate) fn create_file<P: AsRef<Path>>(file: P) -> Result<BufWriter<File>, ImageErrors> {
    Ok(BufWriter::new(
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file)?
    ))
}
