/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixdiff_core::pixel_buffer::PixelBuffer;
use pixdiff_image::errors::ImageErrors;
use pixdiff_image::io;
use pixdiff_image::samples::{striped, striped_sample, STRIPE_BLACK, STRIPE_YELLOW};
use pixdiff_image::traits::OperationsTrait;
use pixdiff_imageprocs::heatmap::{heatmap, PixelDifferenceHeatmap};

use crate::ScratchFile;

const WHITE: [u8; 3] = [255, 255, 255];

#[test]
fn sample_against_itself_from_disk() {
    let file = ScratchFile::new("heatmap-self.ppm");
    let sample = striped_sample().unwrap();
    io::save(&sample, &file.0).unwrap();

    let reloaded = io::open(&file.0).unwrap();
    let result = heatmap(&sample, &reloaded).unwrap();

    assert_eq!(result.dimensions(), (600, 400));
    assert!(result.pixels().iter().all(|p| *p == WHITE));
}

#[test]
fn sample_against_swapped_stripes() {
    let sample = striped_sample().unwrap();
    let swapped = striped(600, 400, STRIPE_BLACK, STRIPE_YELLOW).unwrap();

    // every pixel differs by the same amount
    let result = heatmap(&sample, &swapped).unwrap();
    assert!(result.pixels().iter().all(|p| *p == [0, 0, 0]));
}

#[test]
fn operation_output_written_as_png() {
    let out = ScratchFile::new("heatmap-out.png");

    let mut second = PixelBuffer::new(2, 1).unwrap();
    let first = PixelBuffer::from_pixels(2, 1, vec![[0, 0, 0], [10, 0, 0]]).unwrap();

    PixelDifferenceHeatmap::new(&first).execute(&mut second).unwrap();
    io::save(&second, &out.0).unwrap();

    let reloaded = io::open(&out.0).unwrap();
    assert_eq!(reloaded.pixels(), &[WHITE, [0, 0, 0]]);
}

#[test]
fn mismatched_files_are_rejected() {
    let small = PixelBuffer::new(2, 2).unwrap();
    let large = PixelBuffer::new(3, 3).unwrap();

    assert!(matches!(
        heatmap(&small, &large),
        Err(ImageErrors::DimensionsMisMatch(_, _))
    ));
}
