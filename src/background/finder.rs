//! macOS backend driving Finder through `osascript`

use std::path::Path;

use tracing::debug;

use super::{BackgroundController, BackgroundHandle, apply_failed, run_helper};
use crate::error::{Result, WallshuffleError};

const OSASCRIPT: &str = "osascript";

const GET_SCRIPT: &str =
    r#"tell application "Finder" to get POSIX path of (get desktop picture as alias)"#;

/// Finder `desktop picture` property
#[derive(Debug, Clone, Copy, Default)]
pub struct FinderBackground;

impl FinderBackground {
    fn set_script(posix_path: &str) -> String {
        format!(
            r#"tell application "Finder" to set desktop picture to POSIX file "{}""#,
            escape_applescript(posix_path)
        )
    }

    fn set(&self, posix_path: &str) -> std::result::Result<(), String> {
        debug!("Finder: setting desktop picture to {}", posix_path);
        run_helper(OSASCRIPT, &["-e", &Self::set_script(posix_path)]).map(|_| ())
    }
}

impl BackgroundController for FinderBackground {
    fn name(&self) -> &'static str {
        "finder"
    }

    fn current(&self) -> Result<BackgroundHandle> {
        let path = run_helper(OSASCRIPT, &["-e", GET_SCRIPT])
            .map_err(|reason| WallshuffleError::BackgroundQueryFailed { reason })?;
        Ok(BackgroundHandle::new(path))
    }

    fn apply(&self, path: &Path) -> Result<()> {
        self.set(&path.to_string_lossy())
            .map_err(|reason| apply_failed(path, reason))
    }

    fn restore(&self, handle: &BackgroundHandle) -> Result<()> {
        self.set(handle.as_raw())
            .map_err(|reason| apply_failed(Path::new(handle.as_raw()), reason))
    }
}

/// Escape a value for use inside an AppleScript string literal
fn escape_applescript(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
