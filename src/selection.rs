//! Random wallpaper selection
//!
//! Draws are uniform and independent: the same image can come up twice in
//! a row.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{Result, WallshuffleError};

/// One draw from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    entry: CatalogEntry,
    cycle: u64,
}

impl SelectionEvent {
    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    /// Zero-based cycle the draw belongs to
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

/// Pick one entry uniformly at random, with replacement across cycles
pub fn select<R: Rng + ?Sized>(
    catalog: &Catalog,
    cycle: u64,
    rng: &mut R,
) -> Result<SelectionEvent> {
    let entry = catalog
        .entries()
        .choose(rng)
        .ok_or_else(|| WallshuffleError::EmptyCatalog {
            path: catalog.root().display().to_string(),
        })?;

    Ok(SelectionEvent {
        entry: entry.clone(),
        cycle,
    })
}
