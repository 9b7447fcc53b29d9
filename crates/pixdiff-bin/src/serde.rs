/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use pixdiff_image::io::ImageInfo;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file: OsString,
    size: u64,
    info: &'a ImageInfo
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, info: &'a ImageInfo) -> Metadata<'a> {
        Metadata { file, size, info }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 5)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("format", &self.info.format)?;
        state.serialize_field("width", &self.info.width)?;
        state.serialize_field("height", &self.info.height)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use pixdiff_image::codecs::ImageFormat;
    use pixdiff_image::io::ImageInfo;

    use crate::serde::Metadata;

    #[test]
    fn serializes_flat_fields() {
        let info = ImageInfo {
            format: ImageFormat::PPM,
            width:  600,
            height: 400
        };
        let metadata = Metadata::new("striped.ppm".into(), 720_015, &info);
        let value: serde_json::Value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["file"], "striped.ppm");
        assert_eq!(value["size"], 720_015);
        assert_eq!(value["format"], "PPM");
        assert_eq!(value["width"], 600);
        assert_eq!(value["height"], 400);
    }
}
