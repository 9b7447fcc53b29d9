/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixdiff_core::bytestream::{ByteIoError, ByteReader, ByteReaderTrait};
use pixdiff_core::log::{info, trace, warn};
use pixdiff_core::options::DecoderOptions;
use pixdiff_core::pixel_buffer::{checked_pixel_count, PixelBuffer};

use crate::errors::PpmDecodeErrors;

/// Longest header token we keep, `usize::MAX` has 20 digits
const MAX_TOKEN_LEN: usize = 20;

/// Number of pixels read from the stream per allocation step,
/// keeps a lying header from making us allocate its full size
/// up front
const PIXELS_PER_CHUNK: usize = 1 << 16;

/// A single whitespace delimited header token
struct Token {
    bytes:    [u8; MAX_TOKEN_LEN],
    len:      usize,
    overlong: bool
}

impl Token {
    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    fn lossy(&self) -> String {
        let mut value = String::from_utf8_lossy(self.as_slice()).into_owned();
        if self.overlong {
            value.push_str("...");
        }
        value
    }

    /// Parse the token as a decimal number, `None` if it contains
    /// anything else or overflows
    fn to_decimal(&self) -> Option<usize> {
        if self.overlong || self.len == 0 {
            return None;
        }
        self.as_slice().iter().try_fold(0_usize, |acc, byte| {
            if !byte.is_ascii_digit() {
                return None;
            }
            acc.checked_mul(10)?.checked_add(usize::from(byte - b'0'))
        })
    }
}

/// Skip any whitespace and read the following token, stopping
/// after the first whitespace byte that ends it.
///
/// Returns `None` if the stream ends before a token starts
fn next_token<T: ByteReaderTrait>(
    reader: &mut ByteReader<T>
) -> Result<Option<Token>, ByteIoError> {
    let mut byte = loop {
        if reader.eof()? {
            return Ok(None);
        }
        let byte = reader.get_u8_err()?;

        if !byte.is_ascii_whitespace() {
            break byte;
        }
    };

    let mut token = Token {
        bytes:    [0; MAX_TOKEN_LEN],
        len:      0,
        overlong: false
    };

    loop {
        if token.len == MAX_TOKEN_LEN {
            // can't be valid for any field, stop reading here
            token.overlong = true;
            break;
        }
        token.bytes[token.len] = byte;
        token.len += 1;

        if reader.eof()? {
            break;
        }
        byte = reader.get_u8_err()?;

        if byte.is_ascii_whitespace() {
            break;
        }
    }
    Ok(Some(token))
}

/// A PPM decoder
///
/// The decoder understands binary RGB pixmaps (`P6`) with a maximum
/// value of 255.
///
/// Header tokens are separated by runs of ASCII whitespace, exactly one
/// whitespace byte after the maximum value is consumed before the pixel
/// data. Comments (`#`) are not recognised.
pub struct PpmDecoder<T: ByteReaderTrait> {
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    reader:          ByteReader<T>,
    options:         DecoderOptions
}

impl<T: ByteReaderTrait> PpmDecoder<T> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use pixdiff_core::bytestream::ByteCursor;
    /// use pixdiff_ppm::PpmDecoder;
    /// let mut decoder = PpmDecoder::new(ByteCursor::new(b"NOT VALID PPM"));
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: T) -> PpmDecoder<T> {
        PpmDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Example
    /// ```
    /// use pixdiff_core::bytestream::ByteCursor;
    /// use pixdiff_core::options::DecoderOptions;
    /// use pixdiff_ppm::{PpmDecodeErrors, PpmDecoder};
    ///
    /// let options = DecoderOptions::default().set_max_width(10);
    /// let mut decoder = PpmDecoder::new_with_options(ByteCursor::new(b"P6 11 1 255 "), options);
    ///
    /// assert!(matches!(decoder.decode(), Err(PpmDecodeErrors::LargeDimensions(10, 11))));
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> PpmDecoder<T> {
        PpmDecoder {
            width: 0,
            height: 0,
            decoded_headers: false,
            reader: ByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Calling it again after a successful call is a no-op
    pub fn decode_headers(&mut self) -> Result<(), PpmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }

        match next_token(&mut self.reader)? {
            Some(magic) if magic.as_slice() == b"P6" => (),
            Some(magic) => return Err(PpmDecodeErrors::BadMagic(magic.lossy())),
            None => return Err(PpmDecodeErrors::BadMagic(String::new()))
        }

        let width = self.read_dimension("width")?;
        let height = self.read_dimension("height")?;

        let max_value =
            next_token(&mut self.reader)?.ok_or(PpmDecodeErrors::TruncatedHeader("max value"))?;

        if max_value.to_decimal() != Some(255) {
            return Err(PpmDecodeErrors::UnsupportedMaxValue(max_value.lossy()));
        }

        if width > self.options.get_max_width() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        checked_pixel_count(width, height)?;

        info!("Width: {}, height: {}", width, height);
        trace!("Header length: {} bytes", self.reader.position());

        self.width = width;
        self.height = height;
        self.decoded_headers = true;

        Ok(())
    }

    fn read_dimension(&mut self, field: &'static str) -> Result<usize, PpmDecodeErrors> {
        let token = next_token(&mut self.reader)?.ok_or(PpmDecodeErrors::TruncatedHeader(field))?;

        token
            .to_decimal()
            .ok_or_else(|| PpmDecodeErrors::BadDimensions(token.lossy()))
    }

    /// Return image dimensions as `(width, height)` or `None` if
    /// headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Decode a ppm encoded stream into a pixel buffer
    ///
    /// Headers are decoded first if [`decode_headers`](Self::decode_headers)
    /// was not called. Bytes after the pixel data are an error in strict mode
    /// and otherwise left unread.
    pub fn decode(&mut self) -> Result<PixelBuffer, PpmDecodeErrors> {
        self.decode_headers()?;

        let count = self.width * self.height;
        let mut pixels: Vec<[u8; 3]> = Vec::new();

        while pixels.len() < count {
            let start = pixels.len();
            let end = start + PIXELS_PER_CHUNK.min(count - start);

            pixels
                .try_reserve_exact(end - start)
                .map_err(|_| PpmDecodeErrors::AllocationFailure(count * 3))?;
            pixels.resize(end, [0; 3]);

            let wanted = (end - start) * 3;
            let read = self
                .reader
                .read_up_to(pixels[start..end].as_flattened_mut())?;

            if read != wanted {
                return Err(PpmDecodeErrors::TruncatedData(
                    count * 3,
                    start * 3 + read
                ));
            }
        }

        if !self.reader.eof()? {
            if self.options.get_strict_mode() {
                let trailing = self.reader.skip_remaining()?;
                return Err(PpmDecodeErrors::TrailingData(trailing));
            }
            warn!("Extra bytes after the pixel data, ignoring them");
        }

        Ok(PixelBuffer::from_pixels(self.width, self.height, pixels)?)
    }
}

#[cfg(test)]
mod tests {
    use pixdiff_core::bytestream::ByteCursor;
    use pixdiff_core::options::DecoderOptions;

    use crate::{PpmDecodeErrors, PpmDecoder};

    fn decode(data: &[u8]) -> Result<pixdiff_core::pixel_buffer::PixelBuffer, PpmDecodeErrors> {
        PpmDecoder::new(ByteCursor::new(data)).decode()
    }

    #[test]
    fn headers_alone_give_dimensions() {
        let mut decoder = PpmDecoder::new(ByteCursor::new(b"P6\n3 7\n255\n"));

        assert_eq!(decoder.dimensions(), None);
        decoder.decode_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((3, 7)));
    }

    #[test]
    fn empty_stream_is_bad_magic() {
        assert!(matches!(decode(b""), Err(PpmDecodeErrors::BadMagic(_))));
        assert!(matches!(decode(b"  \n\t"), Err(PpmDecodeErrors::BadMagic(_))));
    }

    #[test]
    fn magic_must_be_a_whole_token() {
        assert!(matches!(decode(b"P6x 1 1 255 abc"), Err(PpmDecodeErrors::BadMagic(_))));
        assert!(matches!(decode(b"P5 1 1 255 a"), Err(PpmDecodeErrors::BadMagic(_))));
    }

    #[test]
    fn comments_are_not_supported() {
        assert!(matches!(
            decode(b"P6\n# made by gimp\n1 1\n255\nabc"),
            Err(PpmDecodeErrors::BadDimensions(_))
        ));
    }

    #[test]
    fn dimensions_must_be_decimal() {
        assert!(matches!(decode(b"P6 -1 1 255 "), Err(PpmDecodeErrors::BadDimensions(_))));
        assert!(matches!(decode(b"P6 1 0x2 255 "), Err(PpmDecodeErrors::BadDimensions(_))));
        assert!(matches!(
            decode(b"P6 99999999999999999999999 1 255 "),
            Err(PpmDecodeErrors::BadDimensions(_))
        ));
    }

    #[test]
    fn max_value_must_be_255() {
        assert!(matches!(decode(b"P6 1 1 65535 abcdef"), Err(PpmDecodeErrors::UnsupportedMaxValue(_))));
        assert!(matches!(decode(b"P6 1 1 ff abc"), Err(PpmDecodeErrors::UnsupportedMaxValue(_))));
    }

    #[test]
    fn missing_header_fields() {
        assert!(matches!(decode(b"P6\n"), Err(PpmDecodeErrors::TruncatedHeader("width"))));
        assert!(matches!(decode(b"P6 2"), Err(PpmDecodeErrors::TruncatedHeader("height"))));
        assert!(matches!(decode(b"P6 2 2 "), Err(PpmDecodeErrors::TruncatedHeader("max value"))));
    }

    #[test]
    fn limits_are_checked_before_reading_pixels() {
        let options = DecoderOptions::default()
            .set_max_width(16384)
            .set_max_height(16384);
        let decode_limited =
            |data: &[u8]| PpmDecoder::new_with_options(ByteCursor::new(data), options).decode();

        assert!(matches!(
            decode_limited(b"P6 16385 1 255 "),
            Err(PpmDecodeErrors::LargeDimensions(16384, 16385))
        ));
        assert!(matches!(
            decode_limited(b"P6 1 20000 255 "),
            Err(PpmDecodeErrors::LargeDimensions(16384, 20000))
        ));
        // the limit itself is allowed
        assert!(matches!(
            decode_limited(b"P6 16384 1 255 "),
            Err(PpmDecodeErrors::TruncatedData(49152, 0))
        ));
    }

    #[test]
    fn no_dimension_limit_by_default() {
        let mut data = b"P6 20000 1 255\n".to_vec();
        data.extend(std::iter::repeat([1_u8, 2, 3]).take(20_000).flatten());

        let image = decode(&data).unwrap();
        assert_eq!(image.dimensions(), (20_000, 1));
        assert!(image.pixels().iter().all(|p| *p == [1, 2, 3]));
    }

    #[test]
    fn empty_image_decodes() {
        let image = decode(b"P6\n0 0\n255\n").unwrap();
        assert_eq!(image.dimensions(), (0, 0));
        assert!(image.pixels().is_empty());
    }
}
