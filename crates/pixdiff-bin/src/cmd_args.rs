/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

fn output_arg(default: Option<&'static str>) -> Arg {
    let arg = Arg::new("out")
        .short('o')
        .long("out")
        .help("Output to write the data to, the format is taken from the last three characters (ppm, png or jpg)")
        .value_parser(value_parser!(PathBuf));

    match default {
        Some(value) => arg.default_value(value),
        None => arg.required(true)
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixdiff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare images pixel by pixel and convert between PPM, PNG and JPEG")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("heatmap")
            .about("Write a grayscale heatmap of the per pixel difference of two images")
            .long_about("Write a grayscale heatmap of the per pixel difference of two images.\nIdentical pixels are white, the most different pixels black.\nBoth images must have the same dimensions.")
            .arg(Arg::new("first")
                .help("First image")
                .required(true)
                .value_parser(value_parser!(PathBuf)))
            .arg(Arg::new("second")
                .help("Second image")
                .required(true)
                .value_parser(value_parser!(PathBuf)))
            .arg(output_arg(None)))
        .subcommand(Command::new("convert")
            .about("Decode an image and save it in the format given by the output extension")
            .arg(Arg::new("in")
                .help("Input file to read data from")
                .required(true)
                .value_parser(value_parser!(PathBuf)))
            .arg(output_arg(None)))
        .subcommand(Command::new("sample")
            .about("Write the 600x400 yellow and black striped sample image")
            .arg(output_arg(Some("striped.ppm"))))
        .subcommand(Command::new("probe")
            .about("Print the format and dimensions of images as JSON")
            .arg(Arg::new("files")
                .help("Images to probe")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of images the decoders accept, unlimited by default")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of images the decoders accept, unlimited by default")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject PPM files with bytes after the pixel data"))
        .arg(Arg::new("quality")
            .long("quality")
            .global(true)
            .help_heading("ADVANCED")
            .help("JPEG quality, between 1 and 100")
            .value_parser(value_parser!(u8).range(1..=100))
            .default_value("100"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files"))
}
