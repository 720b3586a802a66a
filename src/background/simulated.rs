//! In-memory background used by `--dry-run` and tests

use std::cell::RefCell;
use std::path::Path;

use tracing::{debug, info};

use super::{BackgroundController, BackgroundHandle};
use crate::error::Result;

/// Handle reported before anything has been applied
pub const INITIAL_HANDLE: &str = "simulated:initial";

/// Remembers the last applied background and every apply call
#[derive(Debug)]
pub struct SimulatedBackground {
    current: RefCell<BackgroundHandle>,
    applied: RefCell<Vec<String>>,
}

impl Default for SimulatedBackground {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedBackground {
    pub fn new() -> Self {
        Self {
            current: RefCell::new(BackgroundHandle::new(INITIAL_HANDLE)),
            applied: RefCell::new(Vec::new()),
        }
    }

    /// Every path or handle passed to apply/restore, in order
    #[cfg(test)]
    pub fn applied(&self) -> Vec<String> {
        self.applied.borrow().clone()
    }
}

impl BackgroundController for SimulatedBackground {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn current(&self) -> Result<BackgroundHandle> {
        Ok(self.current.borrow().clone())
    }

    fn apply(&self, path: &Path) -> Result<()> {
        let raw = path.display().to_string();
        info!("[DRY RUN] Would set background to {}", raw);
        let mut applied = self.applied.borrow_mut();
        applied.push(raw.clone());
        debug!("{} simulated background changes", applied.len());
        *self.current.borrow_mut() = BackgroundHandle::new(raw);
        Ok(())
    }

    fn restore(&self, handle: &BackgroundHandle) -> Result<()> {
        info!("[DRY RUN] Would restore background to {}", handle);
        self.applied.borrow_mut().push(handle.as_raw().to_string());
        *self.current.borrow_mut() = handle.clone();
        Ok(())
    }
}
