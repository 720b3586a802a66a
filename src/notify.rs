//! Best-effort desktop notifications
//!
//! Notifications are purely informational. A missing notifier binary or a
//! failing call is logged at debug level and otherwise ignored.

use std::process::Stdio;

use tracing::debug;

use crate::background::helper_command;

/// Title shown on every notification
pub const TITLE: &str = "wallshuffle";

/// Something that can show a short message to the user
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Uses `terminal-notifier` (falling back to `osascript`) on macOS and
/// `notify-send` elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    fn spawn(program: &str, args: &[&str]) -> bool {
        match helper_command(program, args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => true,
            Ok(status) => {
                debug!("{} exited with {}", program, status);
                false
            }
            Err(e) => {
                debug!("{} unavailable: {}", program, e);
                false
            }
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) {
        if cfg!(target_os = "macos") {
            if Self::spawn("terminal-notifier", &["-title", TITLE, "-message", message]) {
                return;
            }
            let script = format!(
                "display notification \"{}\" with title \"{}\"",
                message.replace('\\', "\\\\").replace('"', "\\\""),
                TITLE
            );
            Self::spawn("osascript", &["-e", &script]);
        } else {
            Self::spawn("notify-send", &[TITLE, message]);
        }
    }
}

/// Drops every message
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, message: &str) {
        debug!("notification suppressed: {}", message);
    }
}

/// Pick the notifier for the current run
pub fn notifier(enabled: bool) -> Box<dyn Notifier> {
    if enabled {
        Box::new(DesktopNotifier)
    } else {
        Box::new(SilentNotifier)
    }
}
