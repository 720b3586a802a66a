//! Test fixtures for building wallpaper folders.
//!
//! Image files only need a valid signature: the catalog classifies files by
//! their leading bytes and never decodes them.
//!
//! ```ignore
//! use crate::test_fixtures::{create_wallpaper_dir, write_image};
//!
//! let temp = create_wallpaper_dir(&["a.png", "b.jpg"]);
//! write_image(temp.path(), "c.gif");
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// PNG signature followed by the start of an IHDR chunk
pub const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

/// JPEG SOI marker with a JFIF APP0 segment
pub const JPEG_BYTES: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
];

/// GIF89a header
pub const GIF_BYTES: &[u8] = b"GIF89a\x01\x00\x01\x00\x00\x00\x00";

/// HEIC file type box
pub const HEIC_BYTES: &[u8] = &[
    0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'h', b'e', b'i', b'c', 0x00, 0x00, 0x00, 0x00,
];

/// Plain text that matches no image signature
pub const TEXT_BYTES: &[u8] = b"just some notes, not a picture\n";

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a temp directory holding one image per name.
///
/// # Panics
///
/// Panics if a file cannot be written.
#[must_use]
pub fn create_wallpaper_dir(names: &[&str]) -> TempDir {
    let temp = create_temp_dir();
    for name in names {
        write_image(temp.path(), name);
    }
    temp
}

/// Write an image whose signature matches the file extension (PNG otherwise).
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_image(dir: &Path, name: &str) -> PathBuf {
    let bytes = match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => JPEG_BYTES,
        Some("gif") => GIF_BYTES,
        Some("heic") => HEIC_BYTES,
        _ => PNG_BYTES,
    };
    write_bytes(dir, name, bytes)
}

/// Write arbitrary bytes to `dir/name`.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture file");
    path
}
