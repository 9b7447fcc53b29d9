/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::warn;
use pixdiff_core::options::DecoderOptions;
use pixdiff_image::errors::ImageErrors;
use pixdiff_image::io::probe;

use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), ImageErrors> {
    let Some(files) = args.get_many::<PathBuf>("files") else {
        return Ok(());
    };

    for in_file in files {
        if !in_file.exists() {
            warn!("Path {:?} does not exist, skipping", in_file);
            continue;
        }
        let size = std::fs::metadata(in_file)?.len();
        let info = probe(in_file, DecoderOptions::default())?;
        let metadata = Metadata::new(in_file.as_os_str().to_os_string(), size, &info);

        let json = serde_json::to_string_pretty(&metadata)
            .map_err(|e| ImageErrors::GenericString(e.to_string()))?;
        println!("{json}");
    }
    Ok(())
}
