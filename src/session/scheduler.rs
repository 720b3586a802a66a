//! Rotation scheduler
//!
//! Runs one session from start to finish. Startup failures are returned to
//! the caller; once the session is running every cycle error is contained
//! and the loop keeps going until it is interrupted or hits the cycle limit.

use std::io::Write;

use console::style;
use rand::Rng;
use tracing::{debug, info, warn};

use super::{Session, SessionState};
use crate::background::BackgroundController;
use crate::catalog::{Catalog, Drift};
use crate::config::{ReportFormat, SessionConfig};
use crate::error::{Result, WallshuffleError};
use crate::notify::Notifier;
use crate::selection::{self, SelectionEvent};
use crate::usage::{HistogramRenderer, TerminalHistogram, UsageReport};

/// Drives a [`Session`] through its lifecycle
pub struct Scheduler<'a, R: Rng> {
    config: &'a SessionConfig,
    background: &'a dyn BackgroundController,
    notifier: &'a dyn Notifier,
    cancel: super::CancelToken,
    rng: R,
    histogram: TerminalHistogram,
}

impl<'a, R: Rng> Scheduler<'a, R> {
    pub fn new(
        config: &'a SessionConfig,
        background: &'a dyn BackgroundController,
        notifier: &'a dyn Notifier,
        cancel: super::CancelToken,
        rng: R,
    ) -> Self {
        Self {
            config,
            background,
            notifier,
            cancel,
            rng,
            histogram: TerminalHistogram::default(),
        }
    }

    /// Run a whole session and return it in the `Terminated` state.
    ///
    /// Once the session is running, restore and report always happen. A
    /// fatal cycle error is returned only after the lifecycle has finished.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<Session> {
        let mut session = self.start(out)?;
        let rotated = self.rotate(&mut session, out);
        self.restore(&mut session, out);
        self.report(&mut session, out);

        session.transition(SessionState::Terminated);
        self.status(out, "[*]", "Done. Exiting.");
        rotated.map(|()| session)
    }

    /// Initializing: scan the folder and capture the background to restore.
    ///
    /// A missing folder or an empty catalog aborts the session here.
    pub fn start(&self, out: &mut dyn Write) -> Result<Session> {
        self.initialize(out).inspect_err(|e| {
            self.notifier.notify(&format!("Error: {e}"));
        })
    }

    fn initialize(&self, out: &mut dyn Write) -> Result<Session> {
        let catalog = Catalog::scan(&self.config.directory)?;
        if catalog.is_empty() {
            return Err(WallshuffleError::EmptyCatalog {
                path: self.config.directory.display().to_string(),
            });
        }

        let initial = if self.config.restore {
            self.status(out, "[*]", "Saving current wallpaper");
            let handle = self.background.current()?;
            debug!("Initial background: {}", handle);
            Some(handle)
        } else {
            None
        };

        info!(
            "Rotating {} images from {} every {}s using {}",
            catalog.len(),
            self.config.directory.display(),
            self.config.interval.as_secs(),
            self.background.name()
        );

        let mut session = Session::new(catalog, initial);
        session.transition(SessionState::Running);

        let message = "Starting wallpaper shuffle. Press CTRL+C to stop.";
        self.status(out, "[*]", message);
        self.notifier.notify(message);
        Ok(session)
    }

    /// Running: cycle until cancelled or the cycle limit is reached
    pub fn rotate(&mut self, session: &mut Session, out: &mut dyn Write) -> Result<()> {
        let result = self.rotate_until_stopped(session);
        self.status(
            out,
            "[i]",
            &format!("Stopped. Shuffled {} wallpapers.", session.shown()),
        );
        result
    }

    fn rotate_until_stopped(&mut self, session: &mut Session) -> Result<()> {
        loop {
            if self.cancel.is_cancelled() {
                session.transition(SessionState::Interrupted);
                break;
            }

            self.cycle(session)?;

            if self.limit_reached(session) {
                info!("Reached cycle limit of {}", session.cycles);
                break;
            }

            if self.cancel.wait(self.config.interval) {
                session.transition(SessionState::Interrupted);
                break;
            }
        }
        Ok(())
    }

    fn limit_reached(&self, session: &Session) -> bool {
        self.config
            .max_cycles
            .is_some_and(|max| session.cycles >= max)
    }

    /// One cycle: select, apply, record, then re-scan for drift
    pub(crate) fn cycle(&mut self, session: &mut Session) -> Result<()> {
        let index = session.cycles;
        session.cycles += 1;

        match self.show_next(session, index) {
            Ok(event) => debug!(
                "Cycle {}: {} ({}, shown {} times)",
                event.cycle(),
                event.entry().id(),
                event.entry().kind().name(),
                session.usage.count(event.entry().id())
            ),
            Err(e) => self.contain(e)?,
        }

        if let Err(e) = self.rescan(session) {
            self.contain(e)?;
        }

        Ok(())
    }

    fn show_next(&mut self, session: &mut Session, index: u64) -> Result<SelectionEvent> {
        let event = selection::select(&session.catalog, index, &mut self.rng)?;
        self.background.apply(event.entry().path())?;
        session.usage.record(event.entry());
        Ok(event)
    }

    /// Replace the catalog with a fresh scan, reporting any size change
    pub(crate) fn rescan(&self, session: &mut Session) -> Result<Option<Drift>> {
        let fresh = Catalog::scan(&self.config.directory)?;
        let drift = fresh.drift_from(&session.catalog);
        if let Some(drift) = drift {
            info!("{}", drift);
            self.notifier.notify(&drift.to_string());
        }
        session.catalog = fresh;
        Ok(drift)
    }

    /// Decide what a failed cycle step means for the session
    fn contain(&self, err: WallshuffleError) -> Result<()> {
        match err {
            WallshuffleError::EmptyCatalog { ref path } => {
                warn!("No images in {}, skipping this cycle", path);
                self.notifier.notify(&format!("Error: {err}"));
            }
            WallshuffleError::DirectoryUnavailable { ref path } => {
                warn!("{} is unavailable, keeping the previous image list", path);
                self.notifier.notify(&format!("Error: {err}"));
            }
            other if other.is_cycle_recoverable() => {
                warn!("{}", other);
                self.notifier.notify(&format!("Error: {other}"));
            }
            other => return Err(other),
        }
        Ok(())
    }

    /// Restoring: put back the background captured at startup
    pub fn restore(&self, session: &mut Session, out: &mut dyn Write) {
        session.transition(SessionState::Restoring);

        if let Some(handle) = session.initial_background.as_ref() {
            self.status(out, "[*]", "Restoring initial wallpaper");
            if let Err(e) = self.background.restore(handle) {
                warn!("{}", e);
                self.notifier.notify(&format!("Error: {e}"));
            }
        }
    }

    /// Reporting: print statistics when analytics were requested
    pub fn report(&self, session: &mut Session, out: &mut dyn Write) {
        session.transition(SessionState::Reporting);

        if !self.config.analyze {
            return;
        }
        if let Err(e) = self.write_report(session, out) {
            warn!("Usage report not written: {}", e);
        }
    }

    fn write_report(&self, session: &Session, out: &mut dyn Write) -> Result<()> {
        match self.config.report {
            ReportFormat::Json => {
                let report = UsageReport::new(session.cycles, &session.usage);
                writeln!(out, "{}", report.to_json()?)?;
            }
            ReportFormat::Text => match session.usage.summarize() {
                Ok(summary) => {
                    self.status(
                        out,
                        "[i]",
                        &format!(
                            "{} of {} images shown, mean {:.2} times each, std dev {:.2}",
                            summary.distinct,
                            session.catalog.len(),
                            summary.mean,
                            summary.std_dev
                        ),
                    );
                    self.histogram.render(&session.usage, out)?;
                }
                Err(WallshuffleError::NoData) => {
                    self.status(out, "[i]", "No wallpapers were shown, nothing to analyze.");
                }
                Err(e) => return Err(e),
            },
        }
        Ok(())
    }

    /// Print an operator status line.
    ///
    /// With a JSON report the lines go to stderr so `out` carries only the
    /// document. A failed write never affects the session.
    fn status(&self, out: &mut dyn Write, marker: &str, message: &str) {
        let line = format!("{} {}", style(marker).cyan().bold(), message);
        let written = if self.json_report() {
            writeln!(std::io::stderr(), "{line}")
        } else {
            writeln!(out, "{line}")
        };
        if let Err(e) = written {
            warn!("Failed to write status line: {}", e);
        }
    }

    fn json_report(&self) -> bool {
        self.config.analyze && self.config.report == ReportFormat::Json
    }
}
