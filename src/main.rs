//! wallshuffle - desktop wallpaper shuffler
//!
//! Sets a random image from a folder as the desktop background at a fixed
//! interval. On Ctrl+C it can put the original background back and print how
//! evenly the images were used.

use clap::{CommandFactory, Parser};
use miette::Diagnostic;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

mod background;
mod catalog;
mod cli;
mod config;
mod error;
mod logging;
mod notify;
mod selection;
mod session;
mod usage;

#[cfg(test)]
mod test_fixtures;

use background::BackgroundController;
use cli::Cli;
use config::SessionConfig;
use error::Result;
use session::{CancelToken, Scheduler};

/// Everything the session needs that can fail before it starts
fn prepare(cli: &Cli) -> Result<(SessionConfig, Box<dyn BackgroundController>, CancelToken)> {
    let config = SessionConfig::from_cli(cli)?;
    let background = config.backend.build()?;
    let cancel = CancelToken::new();
    cancel.install_handler()?;
    Ok((config, background, cancel))
}

fn run(cli: &Cli) -> Result<()> {
    let (config, background, cancel) = prepare(cli).inspect_err(|e| {
        notify::notifier(!cli.no_notify && !cli.dry_run).notify(&format!("Error: {e}"));
    })?;
    let notifier = notify::notifier(config.notifications);

    let mut scheduler = Scheduler::new(
        &config,
        background.as_ref(),
        notifier.as_ref(),
        cancel,
        StdRng::from_entropy(),
    );
    let session = scheduler.run(&mut std::io::stdout())?;
    debug!(
        "Session {} after {} cycles, {} wallpapers shown{}",
        session.state(),
        session.cycles(),
        session.shown(),
        if session.was_interrupted() {
            " (interrupted)"
        } else {
            ""
        }
    );
    Ok(())
}

fn print_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "wallshuffle", &mut std::io::stdout().lock());
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Some(shell) = cli.completions {
        print_completions(shell);
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
