/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use pixdiff_core::options::DecoderOptions;
use pixdiff_core::pixel_buffer::PixelBuffer;
use pixdiff_image::codecs::ImageFormat;
use pixdiff_image::io;
use pixdiff_image::samples::{striped_sample, STRIPE_BLACK, STRIPE_YELLOW};

use crate::ScratchFile;

fn random_image(width: usize, height: usize, seed: u64) -> PixelBuffer {
    let mut bytes = vec![0_u8; width * height * 3];
    WyRand::new_seed(seed).fill(&mut bytes);
    PixelBuffer::from_raw(width, height, bytes).unwrap()
}

#[test]
fn sample_survives_ppm_file() {
    let file = ScratchFile::new("sample.ppm");
    let sample = striped_sample().unwrap();

    io::save(&sample, &file.0).unwrap();
    let size = std::fs::metadata(&file.0).unwrap().len();
    assert_eq!(size, (b"P6\n600 400\n255\n".len() + 600 * 400 * 3) as u64);

    let decoded = io::open(&file.0).unwrap();
    assert_eq!(decoded, sample);
    assert_eq!(decoded.get(0, 0), Some(STRIPE_YELLOW));
    assert_eq!(decoded.get(599, 399), Some(STRIPE_BLACK));
}

#[test]
fn ppm_to_png_and_back() {
    let ppm = ScratchFile::new("convert-in.ppm");
    let png = ScratchFile::new("convert-mid.png");
    let back = ScratchFile::new("convert-out.ppm");

    let image = random_image(37, 23, 7);
    io::save(&image, &ppm.0).unwrap();

    let decoded = io::open(&ppm.0).unwrap();
    io::save(&decoded, &png.0).unwrap();
    assert_eq!(
        io::probe(&png.0, DecoderOptions::default()).unwrap().format,
        ImageFormat::PNG
    );

    let from_png = io::open(&png.0).unwrap();
    io::save(&from_png, &back.0).unwrap();

    assert_eq!(io::open(&back.0).unwrap(), image);
}

#[test]
fn jpeg_keeps_dimensions() {
    let jpg = ScratchFile::new("sample.jpg");
    let sample = striped_sample().unwrap();

    io::save(&sample, &jpg.0).unwrap();
    let decoded = io::open(&jpg.0).unwrap();

    assert_eq!(decoded.dimensions(), sample.dimensions());
    // flat stripes survive lossy compression closely
    let [r, g, b] = decoded.get(300, 10).unwrap();
    assert!(r > 200 && g > 180 && b < 60);
}

#[test]
fn decoder_limits_apply_to_files() {
    let file = ScratchFile::new("limits.ppm");
    io::save(&random_image(64, 8, 3), &file.0).unwrap();

    let options = DecoderOptions::default().set_max_width(32);
    assert!(io::open_with_options(&file.0, options).is_err());
    assert!(io::open_with_options(&file.0, DecoderOptions::default()).is_ok());
}
