/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufReader, Cursor};

use pixdiff_core::bytestream::ByteCursor;
use pixdiff_core::options::DecoderOptions;
use pixdiff_ppm::{PpmDecodeErrors, PpmDecoder};

fn ppm(header: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut data = header.to_vec();
    data.extend_from_slice(payload);
    data
}

#[test]
fn decode_small_image() {
    let data = ppm(b"P6\n2 1\n255\n", &[1, 2, 3, 4, 5, 6]);
    let image = PpmDecoder::new(ByteCursor::new(&data)).decode().unwrap();

    assert_eq!(image.dimensions(), (2, 1));
    assert_eq!(image.pixels(), &[[1, 2, 3], [4, 5, 6]]);
}

#[test]
fn reject_ascii_pixmap() {
    let data = ppm(b"P3\n2 2\n255\n", b"0 0 0 0 0 0 0 0 0 0 0 0");
    let err = PpmDecoder::new(ByteCursor::new(&data)).decode().unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::BadMagic(ref found) if found == "P3"));
}

#[test]
fn reject_max_value_other_than_255() {
    let data = ppm(b"P6\n2 2\n100\n", &[0; 12]);
    let err = PpmDecoder::new(ByteCursor::new(&data)).decode().unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::UnsupportedMaxValue(_)));
}

#[test]
fn reject_truncated_payload() {
    let data = ppm(b"P6\n2 2\n255\n", &[0; 5]);
    let err = PpmDecoder::new(ByteCursor::new(&data)).decode().unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::TruncatedData(12, 5)));
}

#[test]
fn only_one_separator_is_consumed_after_max_value() {
    // the first payload byte is a newline and the last a space, both must
    // land in the image
    let payload = [b'\n', b' ', b'\t', 0, 0, b' '];
    let data = ppm(b"P6\n2 1\n255\n", &payload);

    let image = PpmDecoder::new(ByteCursor::new(&data)).decode().unwrap();

    assert_eq!(image.as_bytes(), &payload);
}

#[test]
fn mixed_whitespace_between_tokens() {
    let data = ppm(b"  P6 \t\n\n 1\t\t\n1 \r\n  255\n", &[9, 8, 7]);
    let image = PpmDecoder::new(ByteCursor::new(&data)).decode().unwrap();

    assert_eq!(image.pixels(), &[[9, 8, 7]]);
}

#[test]
fn trailing_bytes_are_left_unread_in_lenient_mode() {
    let data = ppm(b"P6\n1 1\n255\n", &[1, 2, 3, 4, 5]);
    let mut cursor = ByteCursor::new(&data);

    let image = PpmDecoder::new(&mut cursor).decode().unwrap();

    assert_eq!(image.pixels(), &[[1, 2, 3]]);
    assert_eq!(cursor.remaining(), 2);
}

#[test]
fn trailing_bytes_are_rejected_in_strict_mode() {
    let data = ppm(b"P6\n1 1\n255\n", &[1, 2, 3, 4, 5]);
    let options = DecoderOptions::default().set_strict_mode(true);

    let err = PpmDecoder::new_with_options(ByteCursor::new(&data), options)
        .decode()
        .unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::TrailingData(2)));
}

#[test]
fn strict_mode_accepts_exact_files() {
    let data = ppm(b"P6\n1 1\n255\n", &[1, 2, 3]);
    let options = DecoderOptions::default().set_strict_mode(true);

    assert!(PpmDecoder::new_with_options(ByteCursor::new(&data), options)
        .decode()
        .is_ok());
}

#[test]
fn decode_through_std_readers() {
    let data = ppm(b"P6\n300 300\n255\n", &vec![77; 300 * 300 * 3]);

    let from_cursor = PpmDecoder::new(Cursor::new(data.clone())).decode().unwrap();
    // a tiny buffer forces many short reads
    let from_buf_reader = PpmDecoder::new(BufReader::with_capacity(7, Cursor::new(data)))
        .decode()
        .unwrap();

    assert_eq!(from_cursor, from_buf_reader);
    assert!(from_cursor.as_bytes().iter().all(|x| *x == 77));
}

#[test]
fn lying_header_does_not_allocate_everything() {
    // claims 16384x16384 but carries 3 bytes
    let data = ppm(b"P6\n16384 16384\n255\n", &[1, 2, 3]);
    let err = PpmDecoder::new(ByteCursor::new(&data)).decode().unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::TruncatedData(805306368, 3)));
}
