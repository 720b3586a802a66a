//! Common test utilities for wallshuffle integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// PNG signature followed by the start of an IHDR chunk
pub const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

/// JPEG SOI marker with a JFIF APP0 segment
pub const JPEG_BYTES: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
];

/// A folder of wallpapers for a test run
pub struct WallpaperDir {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the folder
    pub path: PathBuf,
}

impl WallpaperDir {
    /// Create an empty folder
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a folder holding one PNG per name
    pub fn with_images(names: &[&str]) -> Self {
        let dir = Self::new();
        for name in names {
            dir.write_png(name);
        }
        dir
    }

    /// Write a PNG-signed file
    pub fn write_png(&self, name: &str) -> PathBuf {
        self.write_bytes(name, PNG_BYTES)
    }

    /// Write a JPEG-signed file
    pub fn write_jpeg(&self, name: &str) -> PathBuf {
        self.write_bytes(name, JPEG_BYTES)
    }

    /// Write a plain text file
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        self.write_bytes(name, content.as_bytes())
    }

    fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path.join(name);
        std::fs::write(&path, bytes).expect("Failed to write file");
        path
    }

    /// Path as a string argument
    pub fn arg(&self) -> &str {
        self.path.to_str().expect("temp path is not UTF-8")
    }
}

impl Default for WallpaperDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Get path to wallshuffle binary
pub fn wallshuffle_bin() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_wallshuffle"))
}

/// Command for the real binary with developer overrides cleared
#[allow(deprecated)]
pub fn wallshuffle_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wallshuffle").expect("binary not built");
    cmd.env_remove("WALLSHUFFLE_PATH");
    cmd.env_remove("WALLSHUFFLE_INTERVAL");
    cmd.env_remove("WALLSHUFFLE_BACKEND");
    cmd.env_remove("WALLSHUFFLE_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}
