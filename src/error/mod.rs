//! Error types and handling for wallshuffle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into two groups. Startup preconditions (missing directory,
//! empty catalog, unusable backend) abort the process. Everything raised
//! inside a rotation cycle is recoverable and only degrades that cycle; see
//! [`WallshuffleError::is_cycle_recoverable`].

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for wallshuffle operations
#[derive(Error, Diagnostic, Debug)]
pub enum WallshuffleError {
    // Catalog errors
    #[error("Path does not exist or is not a directory: {path}")]
    #[diagnostic(
        code(wallshuffle::catalog::directory_unavailable),
        help("Pass an existing folder with --path")
    )]
    DirectoryUnavailable { path: String },

    #[error("No images found in {path}")]
    #[diagnostic(
        code(wallshuffle::catalog::empty),
        help("Only files whose content is a recognised image format are used")
    )]
    EmptyCatalog { path: String },

    // Background errors
    #[error("Failed to set background to {target}: {reason}")]
    #[diagnostic(code(wallshuffle::background::apply_failed))]
    BackgroundApplyFailed { target: String, reason: String },

    #[error("Failed to read current background: {reason}")]
    #[diagnostic(
        code(wallshuffle::background::query_failed),
        help("Run without --restore if the desktop cannot report its background")
    )]
    BackgroundQueryFailed { reason: String },

    #[error("Background backend not available: {backend}")]
    #[diagnostic(
        code(wallshuffle::background::unavailable),
        help("Supported backends: finder (macOS), gsettings (GNOME), simulated")
    )]
    BackendUnavailable { backend: String },

    // Usage errors
    #[error("No selections recorded yet")]
    #[diagnostic(code(wallshuffle::usage::no_data))]
    NoData,

    #[error("Failed to write usage report: {reason}")]
    #[diagnostic(code(wallshuffle::usage::report_failed))]
    ReportFailed { reason: String },

    // Session errors
    #[error("Failed to install interrupt handler: {reason}")]
    #[diagnostic(code(wallshuffle::session::signal_handler))]
    SignalHandler { reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(wallshuffle::fs::io_error))]
    IoError { message: String },
}

impl WallshuffleError {
    /// Whether a rotation cycle may log this error and carry on.
    ///
    /// Only the startup path treats catalog and backend failures as fatal.
    /// Once the session is running these degrade to a skipped or stale cycle.
    pub fn is_cycle_recoverable(&self) -> bool {
        matches!(
            self,
            WallshuffleError::DirectoryUnavailable { .. }
                | WallshuffleError::EmptyCatalog { .. }
                | WallshuffleError::BackgroundApplyFailed { .. }
                | WallshuffleError::IoError { .. }
        )
    }
}

impl From<std::io::Error> for WallshuffleError {
    fn from(err: std::io::Error) -> Self {
        WallshuffleError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WallshuffleError {
    fn from(err: serde_json::Error) -> Self {
        WallshuffleError::ReportFailed {
            reason: err.to_string(),
        }
    }
}

impl From<ctrlc::Error> for WallshuffleError {
    fn from(err: ctrlc::Error) -> Self {
        WallshuffleError::SignalHandler {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, WallshuffleError>;
