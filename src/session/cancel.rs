//! Cooperative cancellation for the rotation loop

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use tracing::debug;

use crate::error::Result;

/// Shared flag that wakes a sleeping session when set
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake any waiter
    pub fn cancel(&self) {
        let (lock, cvar) = &*self.inner;
        if let Ok(mut cancelled) = lock.lock() {
            *cancelled = true;
        }
        cvar.notify_all();
    }

    /// A poisoned lock counts as cancelled
    pub fn is_cancelled(&self) -> bool {
        self.inner.0.lock().map(|c| *c).unwrap_or(true)
    }

    /// Sleep for up to `timeout`, returning early on cancellation.
    ///
    /// Returns `true` when cancelled.
    pub fn wait(&self, timeout: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let Ok(guard) = lock.lock() else {
            return true;
        };
        match cvar.wait_timeout_while(guard, timeout, |cancelled| !*cancelled) {
            Ok((cancelled, _)) => *cancelled,
            Err(_) => true,
        }
    }

    /// Route Ctrl+C (and SIGTERM) to this token
    pub fn install_handler(&self) -> Result<()> {
        let token = self.clone();
        ctrlc::set_handler(move || {
            debug!("Interrupt received");
            token.cancel();
        })?;
        Ok(())
    }
}
