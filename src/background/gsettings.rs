//! GNOME backend using `gsettings`
//!
//! Newer GNOME releases keep a separate wallpaper for the dark style
//! (`picture-uri-dark`). Both keys are written on apply and snapshotted
//! together so a restore puts back exactly what was there.

use std::fmt::Write;
use std::path::Path;

use tracing::debug;

use super::{BackgroundController, BackgroundHandle, apply_failed, run_helper};
use crate::error::{Result, WallshuffleError};

const GSETTINGS: &str = "gsettings";
const SCHEMA: &str = "org.gnome.desktop.background";
const KEY: &str = "picture-uri";
const DARK_KEY: &str = "picture-uri-dark";

/// `org.gnome.desktop.background` settings
#[derive(Debug, Clone, Copy, Default)]
pub struct GsettingsBackground;

impl GsettingsBackground {
    fn get(key: &str) -> std::result::Result<String, String> {
        run_helper(GSETTINGS, &["get", SCHEMA, key])
    }

    fn set(key: &str, value: &str) -> std::result::Result<(), String> {
        debug!("gsettings: {} = {}", key, value);
        run_helper(GSETTINGS, &["set", SCHEMA, key, value]).map(|_| ())
    }

    /// Write both keys. The dark key is optional on older desktops.
    fn set_both(light: &str, dark: Option<&str>) -> std::result::Result<(), String> {
        Self::set(KEY, light)?;
        if let Err(e) = Self::set(DARK_KEY, dark.unwrap_or(light)) {
            debug!("gsettings: {} not updated: {}", DARK_KEY, e);
        }
        Ok(())
    }
}

impl BackgroundController for GsettingsBackground {
    fn name(&self) -> &'static str {
        "gsettings"
    }

    fn current(&self) -> Result<BackgroundHandle> {
        let light =
            Self::get(KEY).map_err(|reason| WallshuffleError::BackgroundQueryFailed { reason })?;
        let raw = match Self::get(DARK_KEY) {
            Ok(dark) => format!("{light}\n{dark}"),
            Err(_) => light,
        };
        Ok(BackgroundHandle::new(raw))
    }

    fn apply(&self, path: &Path) -> Result<()> {
        let value = gvariant_string(&file_uri(path));
        Self::set_both(&value, None).map_err(|reason| apply_failed(path, reason))
    }

    fn restore(&self, handle: &BackgroundHandle) -> Result<()> {
        let mut parts = handle.as_raw().splitn(2, '\n');
        let light = parts.next().unwrap_or_default();
        let dark = parts.next();
        Self::set_both(light, dark).map_err(|reason| apply_failed(Path::new(light), reason))
    }
}

/// `file://` URI with reserved bytes percent-encoded
fn file_uri(path: &Path) -> String {
    let mut uri = String::from("file://");
    for byte in path.to_string_lossy().bytes() {
        if byte.is_ascii_alphanumeric() || b"/-_.~".contains(&byte) {
            uri.push(byte as char);
        } else {
            let _ = write!(uri, "%{byte:02X}");
        }
    }
    uri
}

/// Quote a value as a GVariant text-format string
fn gvariant_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
