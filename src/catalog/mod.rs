//! Wallpaper catalog
//!
//! A catalog is the set of images directly inside the watched directory.
//! It is rebuilt from scratch on every scan and replaced wholesale; nothing
//! mutates a catalog after construction.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, WallshuffleError};

pub mod sniff;

pub use sniff::ImageKind;

/// One eligible image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// File name, unique within a scan
    id: String,
    /// Absolute path handed to the background controller
    path: PathBuf,
    kind: ImageKind,
}

impl CatalogEntry {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ImageKind {
        self.kind
    }
}

/// Images found by a single scan, sorted by identifier
#[derive(Debug, Clone)]
pub struct Catalog {
    root: PathBuf,
    entries: Vec<CatalogEntry>,
}

/// Change in catalog size between two consecutive scans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drift {
    pub previous: usize,
    pub current: usize,
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.current > self.previous {
            "grew"
        } else {
            "shrank"
        };
        write!(
            f,
            "Image folder {verb} from {} to {} images",
            self.previous, self.current
        )
    }
}

impl Catalog {
    /// Scan the direct children of `dir`.
    ///
    /// Subdirectories are skipped and files are kept only when their content
    /// sniffs as an image. Unreadable files are left out. Fails when `dir`
    /// does not exist or is not a directory.
    pub fn scan(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(WallshuffleError::DirectoryUnavailable {
                path: dir.display().to_string(),
            });
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let kind = match sniff::sniff_file(entry.path()) {
                Ok(sniff::ContentKind::Image(kind)) => kind,
                Ok(sniff::ContentKind::NotImage) => {
                    debug!("Not an image: {}", entry.path().display());
                    continue;
                }
                Err(e) => {
                    debug!("Failed to read {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            entries.push(CatalogEntry {
                id: entry.file_name().to_string_lossy().to_string(),
                path: entry.path().to_path_buf(),
                kind,
            });
        }

        debug!("Scanned {}: {} images", dir.display(), entries.len());
        Ok(Self {
            root: dir.to_path_buf(),
            entries,
        })
    }

    /// Directory the catalog was scanned from
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[cfg(test)]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Compare against the previous scan. Only cardinality counts.
    pub fn drift_from(&self, previous: &Catalog) -> Option<Drift> {
        (self.len() != previous.len()).then_some(Drift {
            previous: previous.len(),
            current: self.len(),
        })
    }
}

#[cfg(test)]
mod tests;
