/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end checks running images through several pixdiff crates
#![allow(dead_code)]

use std::path::PathBuf;

#[cfg(test)]
mod heatmap;
#[cfg(test)]
mod roundtrip;

/// A scratch path in the system temp directory, unique per process
/// and test name
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pixdiff-tests-{}-{}", std::process::id(), name))
}

/// Removes the file when dropped so failing tests do not leave
/// files behind
pub struct ScratchFile(pub PathBuf);

impl ScratchFile {
    pub fn new(name: &str) -> ScratchFile {
        ScratchFile(scratch_path(name))
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}
