//! End-of-session usage chart

use std::io::{self, Write};

use console::Style;

use super::UsageRecord;

/// Draws one bar per image: identifier on one axis, count on the other
pub trait HistogramRenderer {
    fn render(&self, usage: &UsageRecord, out: &mut dyn Write) -> io::Result<()>;
}

/// Horizontal bar chart for the terminal
#[derive(Debug, Clone)]
pub struct TerminalHistogram {
    /// Columns used by the longest bar
    width: usize,
}

impl Default for TerminalHistogram {
    fn default() -> Self {
        Self::with_width(40)
    }
}

impl TerminalHistogram {
    pub fn with_width(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn bar_len(&self, count: u64, max: u64) -> usize {
        if count == 0 || max == 0 {
            return 0;
        }
        let scaled = (count as f64 / max as f64 * self.width as f64).round() as usize;
        scaled.max(1)
    }
}

impl HistogramRenderer for TerminalHistogram {
    fn render(&self, usage: &UsageRecord, out: &mut dyn Write) -> io::Result<()> {
        let max = usage.iter().map(|(_, count)| count).max().unwrap_or(0);
        let label_width = usage
            .iter()
            .map(|(id, _)| id.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(
            out,
            "{}",
            Style::new()
                .bold()
                .apply_to(format!("Wallpaper usage ({} selections)", usage.total()))
        )?;

        let bar_style = Style::new().cyan();
        for (id, count) in usage.iter() {
            let bar = "█".repeat(self.bar_len(count, max));
            writeln!(
                out,
                "  {id:<label_width$}  {} {count}",
                bar_style.apply_to(bar)
            )?;
        }

        Ok(())
    }
}
