//! Content sniffing for catalog entries
//!
//! Classification looks only at the leading bytes of a file. File names and
//! extensions are never consulted.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use image::ImageFormat;

/// Number of leading bytes inspected per file
pub const SNIFF_LEN: u64 = 64;

/// ISO-BMFF major brands used by HEIC/HEIF stills and sequences
const HEIF_BRANDS: &[&[u8; 4]] = &[b"heic", b"heix", b"heim", b"heis", b"mif1", b"msf1"];

/// Image family recognised from a file signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Any format the `image` crate can identify by magic bytes
    Raster(ImageFormat),
    /// HEIC/HEIF container
    Heif,
}

impl ImageKind {
    /// Short lowercase name, e.g. `png` or `heic`
    pub fn name(&self) -> &'static str {
        match self {
            ImageKind::Raster(format) => format.extensions_str().first().copied().unwrap_or("image"),
            ImageKind::Heif => "heic",
        }
    }
}

/// Result of sniffing a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image(ImageKind),
    NotImage,
}

/// Classify a byte prefix
pub fn classify(header: &[u8]) -> ContentKind {
    if let Ok(format) = image::guess_format(header) {
        return ContentKind::Image(ImageKind::Raster(format));
    }

    if is_heif(header) {
        return ContentKind::Image(ImageKind::Heif);
    }

    ContentKind::NotImage
}

/// Read the leading bytes of `path` and classify them
pub fn sniff_file(path: &Path) -> io::Result<ContentKind> {
    let mut header = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut header)?;
    Ok(classify(&header))
}

fn is_heif(header: &[u8]) -> bool {
    match (header.get(4..8), header.get(8..12)) {
        (Some(b"ftyp"), Some(brand)) => HEIF_BRANDS.iter().any(|b| b.as_slice() == brand),
        _ => false,
    }
}
