//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::background::BackendKind;
use crate::config::ReportFormat;

/// wallshuffle - desktop wallpaper shuffler
///
/// Picks a random image from a folder at a fixed interval and sets it as the desktop background.
#[derive(Parser, Debug)]
#[command(
    name = "wallshuffle",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Shuffle the desktop wallpaper from a folder of images",
    long_about = "Shuffles the desktop wallpaper at a fixed interval, drawing images at random \
                  from a folder. Press Ctrl+C to stop; with --restore the original wallpaper is \
                  put back and with --analyze a usage chart is printed on exit.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  wallshuffle -p ~/Pictures/walls               \x1b[90m# New wallpaper every minute\x1b[0m\n   \
                  wallshuffle -p ~/Pictures/walls -i 300 -r     \x1b[90m# Every 5 minutes, restore on exit\x1b[0m\n   \
                  wallshuffle -p ./walls --dry-run -i 0 --max-cycles 10 -a \x1b[90m# Simulate 10 picks\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Folder containing the images to shuffle
    #[arg(
        long,
        short = 'p',
        env = "WALLSHUFFLE_PATH",
        value_name = "DIR",
        required_unless_present = "completions"
    )]
    pub path: Option<PathBuf>,

    /// Seconds between wallpaper changes
    #[arg(
        long,
        short = 'i',
        env = "WALLSHUFFLE_INTERVAL",
        value_name = "SECONDS",
        default_value_t = 60
    )]
    pub interval: u64,

    /// Restore the previous wallpaper on exit
    #[arg(long, short = 'r')]
    pub restore: bool,

    /// Print usage statistics and a chart on exit
    #[arg(long, short = 'a')]
    pub analyze: bool,

    /// Output format for --analyze
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,

    /// Stop after this many cycles instead of waiting for Ctrl+C
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_cycles: Option<u64>,

    /// How to change the desktop background
    #[arg(
        long,
        value_enum,
        env = "WALLSHUFFLE_BACKEND",
        default_value_t = BackendKind::Auto
    )]
    pub backend: BackendKind,

    /// Simulate wallpaper changes without touching the desktop
    #[arg(long)]
    pub dry_run: bool,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
