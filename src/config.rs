//! Session configuration
//!
//! There is no configuration file. Settings come from command-line flags and
//! their `WALLSHUFFLE_*` environment fallbacks, and are validated here before
//! the session starts.

use std::path::PathBuf;
use std::time::Duration;

use crate::background::BackendKind;
use crate::cli::Cli;
use crate::error::{Result, WallshuffleError};

/// Output format for the end-of-session analytics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Summary lines and a bar chart
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Validated settings for one session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Watched folder, canonicalized
    pub directory: PathBuf,
    pub interval: Duration,
    pub restore: bool,
    pub analyze: bool,
    pub report: ReportFormat,
    /// Stop after this many cycles; `None` runs until interrupted
    pub max_cycles: Option<u64>,
    pub backend: BackendKind,
    pub notifications: bool,
}

impl SessionConfig {
    /// Settings with defaults for everything but the folder
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            interval: Duration::from_secs(60),
            restore: false,
            analyze: false,
            report: ReportFormat::Text,
            max_cycles: None,
            backend: BackendKind::Auto,
            notifications: true,
        }
    }

    /// Build from parsed arguments, checking that the folder exists
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let path = cli
            .path
            .clone()
            .ok_or_else(|| WallshuffleError::DirectoryUnavailable {
                path: String::new(),
            })?;

        if !path.is_dir() {
            return Err(WallshuffleError::DirectoryUnavailable {
                path: path.display().to_string(),
            });
        }
        let directory = dunce::canonicalize(&path)?;

        let backend = if cli.dry_run {
            BackendKind::Simulated
        } else {
            cli.backend
        };

        Ok(Self {
            interval: Duration::from_secs(cli.interval),
            restore: cli.restore,
            analyze: cli.analyze,
            report: cli.report,
            max_cycles: cli.max_cycles,
            backend,
            notifications: !cli.no_notify && !cli.dry_run,
            ..Self::new(directory)
        })
    }
}
