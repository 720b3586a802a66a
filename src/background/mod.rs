//! Desktop background control
//!
//! The session talks to the desktop only through [`BackgroundController`].
//! A [`BackgroundHandle`] is whatever the backend reports as the current
//! background; callers store and replay it but never look inside.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Result, WallshuffleError};

mod finder;
mod gsettings;
mod simulated;

pub use finder::FinderBackground;
pub use gsettings::GsettingsBackground;
pub use simulated::SimulatedBackground;

/// Opaque snapshot of the desktop background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundHandle(String);

impl BackgroundHandle {
    pub(crate) fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub(crate) fn as_raw(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BackgroundHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read and change the desktop background
pub trait BackgroundController {
    /// Backend name used in log lines
    fn name(&self) -> &'static str;

    /// Snapshot the background currently shown
    fn current(&self) -> Result<BackgroundHandle>;

    /// Show the image at `path`. Best effort: success means the desktop
    /// accepted the request, not that it is already visible.
    fn apply(&self, path: &Path) -> Result<()>;

    /// Put back a snapshot taken with [`BackgroundController::current`]
    fn restore(&self, handle: &BackgroundHandle) -> Result<()>;
}

/// Backend selection from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BackendKind {
    /// Finder on macOS, gsettings on other Unix desktops
    #[default]
    Auto,
    /// macOS Finder via osascript
    Finder,
    /// GNOME and derivatives via gsettings
    Gsettings,
    /// In-memory background, nothing on the desktop changes
    Simulated,
}

impl BackendKind {
    /// Resolve `Auto` for the platform this binary runs on
    pub fn resolve(self) -> Result<BackendKind> {
        match self {
            BackendKind::Auto if cfg!(target_os = "macos") => Ok(BackendKind::Finder),
            BackendKind::Auto if cfg!(unix) => Ok(BackendKind::Gsettings),
            BackendKind::Auto => Err(WallshuffleError::BackendUnavailable {
                backend: std::env::consts::OS.to_string(),
            }),
            other => Ok(other),
        }
    }

    /// Build the controller for this kind
    pub fn build(self) -> Result<Box<dyn BackgroundController>> {
        Ok(match self.resolve()? {
            BackendKind::Finder => Box::new(FinderBackground),
            BackendKind::Gsettings => Box::new(GsettingsBackground),
            BackendKind::Simulated | BackendKind::Auto => Box::new(SimulatedBackground::new()),
        })
    }
}

/// Command for a desktop helper program.
///
/// On Unix the helper gets its own process group, so a terminal Ctrl+C
/// reaches only wallshuffle and an in-flight call finishes normally.
pub(crate) fn helper_command(program: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }
    cmd
}

/// Run a helper program and return its trimmed stdout.
///
/// A non-zero exit becomes an error carrying the program's stderr.
pub(crate) fn run_helper(program: &str, args: &[&str]) -> std::result::Result<String, String> {
    let output = helper_command(program, args)
        .output()
        .map_err(|e| format!("failed to run {program}: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "{program} exited with {}: {}",
            output.status,
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

pub(crate) fn apply_failed(path: &Path, reason: String) -> WallshuffleError {
    WallshuffleError::BackgroundApplyFailed {
        target: path.display().to_string(),
        reason,
    }
}
