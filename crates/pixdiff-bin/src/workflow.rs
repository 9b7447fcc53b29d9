/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use pixdiff_image::codecs::{extension_from_path, ImageFormat};
use pixdiff_image::errors::ImageErrors;
use pixdiff_image::io;
use pixdiff_image::samples::striped_sample;
use pixdiff_image::traits::OperationsTrait;
use pixdiff_imageprocs::heatmap::PixelDifferenceHeatmap;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::probe_files::probe_input_files;

pub(crate) fn exec_subcommand(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    match args.subcommand() {
        Some(("heatmap", sub)) => exec_heatmap(sub, cmd_opts),
        Some(("convert", sub)) => exec_convert(sub, cmd_opts),
        Some(("sample", sub)) => exec_sample(sub, cmd_opts),
        Some(("probe", sub)) => probe_input_files(sub),
        Some((name, _)) => Err(ImageErrors::GenericString(format!(
            "Unknown subcommand {name}"
        ))),
        None => Err(ImageErrors::GenericString("No subcommand given".to_string()))
    }
}

fn exec_heatmap(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    let first_path = required_path(args, "first")?;
    let second_path = required_path(args, "second")?;
    let out_path = required_path(args, "out")?;

    verify_file_paths(first_path, out_path, cmd_opts)?;
    verify_input(second_path)?;

    if second_path == out_path {
        return Err(ImageErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            second_path
        )));
    }

    let first = io::open_with_options(first_path, cmd_opts.decoder_options())?;
    let mut image = io::open_with_options(second_path, cmd_opts.decoder_options())?;

    debug!("Comparing {:?} against {:?}", first_path, second_path);
    PixelDifferenceHeatmap::new(&first).execute(&mut image)?;

    io::save_with_options(&image, out_path, cmd_opts.encoder_options())?;
    info!("Wrote heatmap to {:?}", out_path);

    Ok(())
}

fn exec_convert(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    let in_path = required_path(args, "in")?;
    let out_path = required_path(args, "out")?;

    verify_file_paths(in_path, out_path, cmd_opts)?;

    let image = io::open_with_options(in_path, cmd_opts.decoder_options())?;
    io::save_with_options(&image, out_path, cmd_opts.encoder_options())?;
    info!("Converted {:?} to {:?}", in_path, out_path);

    Ok(())
}

fn exec_sample(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    let out_path = required_path(args, "out")?;

    verify_output(out_path, cmd_opts)?;

    let image = striped_sample()?;
    io::save_with_options(&image, out_path, cmd_opts.encoder_options())?;
    info!("Wrote sample image to {:?}", out_path);

    Ok(())
}

fn required_path<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a Path, ImageErrors> {
    args.get_one::<PathBuf>(id)
        .map(PathBuf::as_path)
        .ok_or_else(|| ImageErrors::GenericString(format!("Missing argument {id}")))
}

fn verify_file_paths(
    in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    if in_path == out_path {
        return Err(ImageErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            in_path
        )));
    }
    verify_input(in_path)?;
    verify_output(out_path, cmd_opts)
}

fn verify_input(in_path: &Path) -> Result<(), ImageErrors> {
    if !in_path.exists() {
        return Err(ImageErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(ImageErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }
    Ok(())
}

/// Check the output extension names an encoder and that we
/// are allowed to overwrite the file, before any decoding work
fn verify_output(out_path: &Path, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    let ext = extension_from_path(out_path)?;

    if ImageFormat::encoder_for_extension(ext).is_none() {
        return Err(ImageErrors::InvalidExtension(
            out_path.to_string_lossy().into_owned()
        ));
    }

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            return Err(ImageErrors::GenericString(format!(
                "File {:?} exists, pass --yes to overwrite it",
                out_path
            )));
        }
    }
    Ok(())
}
