//! Per-wallpaper usage counts and summary statistics
//!
//! Counts only ever go up during a session and are not persisted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::CatalogEntry;
use crate::error::{Result, WallshuffleError};

pub mod histogram;

pub use histogram::{HistogramRenderer, TerminalHistogram};

/// Selection count per catalog identifier
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct UsageRecord {
    counts: BTreeMap<String, u64>,
}

/// Distribution of counts over the images that were shown at least once
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageSummary {
    /// Total selections
    pub total: u64,
    /// Images selected at least once
    pub distinct: usize,
    pub mean: f64,
    /// Population standard deviation (divides by `distinct`)
    pub std_dev: f64,
}

impl UsageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one selection of `entry`
    pub fn record(&mut self, entry: &CatalogEntry) {
        self.record_id(entry.id());
    }

    pub(crate) fn record_id(&mut self, id: &str) {
        *self.counts.entry(id.to_string()).or_insert(0) += 1;
    }

    /// Selections of `id` so far, zero if never selected
    pub fn count(&self, id: &str) -> u64 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Counts sorted by identifier
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(id, count)| (id.as_str(), *count))
    }

    /// Mean and population standard deviation of the non-zero counts
    #[allow(clippy::cast_precision_loss)]
    pub fn summarize(&self) -> Result<UsageSummary> {
        if self.counts.is_empty() {
            return Err(WallshuffleError::NoData);
        }

        let total = self.total();
        let distinct = self.distinct();
        let n = distinct as f64;
        let mean = total as f64 / n;
        let variance = self
            .counts
            .values()
            .map(|&count| {
                let diff = count as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / n;

        Ok(UsageSummary {
            total,
            distinct,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Machine-readable end-of-session report
#[derive(Debug, Serialize)]
pub struct UsageReport<'a> {
    pub cycles: u64,
    pub summary: Option<UsageSummary>,
    pub usage: &'a UsageRecord,
}

impl<'a> UsageReport<'a> {
    pub fn new(cycles: u64, usage: &'a UsageRecord) -> Self {
        Self {
            cycles,
            summary: usage.summarize().ok(),
            usage,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
