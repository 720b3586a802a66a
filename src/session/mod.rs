//! Rotation session
//!
//! A [`Session`] owns everything that changes while wallpapers rotate: the
//! current catalog, the usage counts, the captured initial background and
//! the lifecycle state. The [`Scheduler`] drives it through
//! `Initializing -> Running -> [Interrupted ->] Restoring -> Reporting -> Terminated`.

use std::fmt;

use crate::background::BackgroundHandle;
use crate::catalog::Catalog;
use crate::usage::UsageRecord;

mod cancel;
mod scheduler;

pub use cancel::CancelToken;
pub use scheduler::Scheduler;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Initializing,
    Running,
    Interrupted,
    Restoring,
    Reporting,
    Terminated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Initializing => "initializing",
            SessionState::Running => "running",
            SessionState::Interrupted => "interrupted",
            SessionState::Restoring => "restoring",
            SessionState::Reporting => "reporting",
            SessionState::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Mutable state of one rotation run
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    catalog: Catalog,
    usage: UsageRecord,
    initial_background: Option<BackgroundHandle>,
    /// Cycles run so far, skipped ones included
    cycles: u64,
    /// Set once the loop has been left through the interrupt path
    interrupted: bool,
}

impl Session {
    pub(crate) fn new(catalog: Catalog, initial_background: Option<BackgroundHandle>) -> Self {
        Self {
            state: SessionState::Initializing,
            catalog,
            usage: UsageRecord::new(),
            initial_background,
            cycles: 0,
            interrupted: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub fn usage(&self) -> &UsageRecord {
        &self.usage
    }

    #[cfg(test)]
    pub fn initial_background(&self) -> Option<&BackgroundHandle> {
        self.initial_background.as_ref()
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Wallpapers actually applied
    pub fn shown(&self) -> u64 {
        self.usage.total()
    }

    pub fn was_interrupted(&self) -> bool {
        self.interrupted
    }

    pub(crate) fn transition(&mut self, next: SessionState) {
        tracing::debug!("Session {} -> {}", self.state, next);
        if next == SessionState::Interrupted {
            self.interrupted = true;
        }
        self.state = next;
    }
}
