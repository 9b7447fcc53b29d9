/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use nanorand::{Rng, WyRand};
use pixdiff_core::options::{DecoderOptions, EncoderOptions};
use pixdiff_core::pixel_buffer::PixelBuffer;
use pixdiff_image::codecs::raster::{decode_raster, encode_raster, RasterFormat};
use pixdiff_image::codecs::ImageFormat;
use pixdiff_image::errors::ImageErrors;
use pixdiff_image::io;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pixdiff-image-{}-{name}", std::process::id()))
}

fn random_image(width: usize, height: usize) -> PixelBuffer {
    let mut raw = vec![0_u8; width * height * 3];
    WyRand::new_seed(0xdead).fill(&mut raw);

    PixelBuffer::from_raw(width, height, raw).unwrap()
}

#[test]
fn png_round_trip_is_exact() {
    let image = random_image(31, 17);
    let path = temp_path("round_trip.png");

    encode_raster(&path, &image, RasterFormat::Png, EncoderOptions::default()).unwrap();
    let decoded = decode_raster(&path, DecoderOptions::default()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(decoded, image);
}

#[test]
fn save_picks_format_from_extension() {
    let image = random_image(8, 8);

    for (name, format) in [
        ("by_ext.ppm", ImageFormat::PPM),
        ("by_ext.png", ImageFormat::PNG),
        ("by_ext.jpg", ImageFormat::JPEG)
    ] {
        let path = temp_path(name);
        io::save(&image, &path).unwrap();

        let info = io::probe(&path, DecoderOptions::default()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(info.format, format);
        assert_eq!((info.width, info.height), (8, 8));
    }
}

#[test]
fn open_detects_format_from_content() {
    let image = random_image(5, 4);
    let ppm_path = temp_path("really_a_ppm.png");

    // write ppm bytes behind a png name
    let mut encoded = vec![];
    io::encode(&image, ImageFormat::PPM, EncoderOptions::default(), &mut encoded).unwrap();
    std::fs::write(&ppm_path, &encoded).unwrap();

    let decoded = io::open(&ppm_path).unwrap();
    std::fs::remove_file(&ppm_path).unwrap();

    assert_eq!(decoded, image);
}

#[test]
fn invalid_extensions_do_not_create_files() {
    let image = random_image(2, 2);

    for name in ["out.PNG", "a.gif", "abcpng"] {
        let path = temp_path(name);
        let result = io::save(&image, &path);

        assert!(matches!(result, Err(ImageErrors::InvalidExtension(_))), "{name}");
        assert!(!path.exists());
    }
}

#[test]
fn unknown_content_is_rejected() {
    let path = temp_path("unknown.bin");
    std::fs::write(&path, b"GIF89a").unwrap();

    let result = io::open(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(ImageErrors::ImageDecoderNotImplemented(ImageFormat::Unknown))
    ));
}

#[test]
fn jpeg_quality_changes_output() {
    let image = random_image(64, 64);
    let mut best = vec![];
    let mut worst = vec![];

    io::encode(&image, ImageFormat::JPEG, EncoderOptions::default(), &mut best).unwrap();
    io::encode(
        &image,
        ImageFormat::JPEG,
        EncoderOptions::default().set_quality(10),
        &mut worst
    )
    .unwrap();

    assert!(worst.len() < best.len());
}

#[test]
fn missing_file_is_an_io_error() {
    let result = io::open(temp_path("does-not-exist.ppm"));

    assert!(matches!(result, Err(ImageErrors::IoErrors(_))));
}
