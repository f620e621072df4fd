//! Page progress and alignment totals

use indicatif::{ProgressBar, ProgressStyle};
use overlay_engine::AlignmentStats;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Running totals over every page seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageTotals {
    /// Pages resolved
    pub pages: usize,
    /// Pages that failed to decode
    pub failed: usize,
    /// Chunks read
    pub chunks: usize,
    /// Chunks emitted as highlight regions
    pub regions: usize,
    /// Chunks hidden inside an earlier box
    pub hidden: usize,
    /// Chunks merged into an earlier box
    pub merged: usize,
}

impl PageTotals {
    fn add(&mut self, stats: &AlignmentStats) {
        self.pages += 1;
        self.chunks += stats.input;
        self.regions += stats.output;
        self.hidden += stats.hidden;
        self.merged += stats.merged;
    }
}

impl fmt::Display for PageTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} regions from {} chunks on {} page(s), {} hidden, {} merged",
            self.regions, self.chunks, self.pages, self.hidden, self.merged
        )?;
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        Ok(())
    }
}

/// Tracks resolved pages; draws a bar when more than one page is queued
pub struct PageProgress {
    bar: Option<ProgressBar>,
    totals: Mutex<PageTotals>,
}

impl PageProgress {
    /// Start tracking `total_pages` pages
    pub fn new(total_pages: usize, quiet: bool) -> Self {
        let bar = (!quiet && total_pages > 1).then(|| {
            let style = ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} pages {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-");
            let bar = ProgressBar::new(total_pages as u64).with_style(style);
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });

        Self {
            bar,
            totals: Mutex::new(PageTotals::default()),
        }
    }

    /// Record one page; `None` marks a page that failed to decode
    pub fn page_resolved(&self, source: &str, stats: Option<&AlignmentStats>) {
        let mut totals = self.totals.lock().unwrap_or_else(PoisonError::into_inner);
        let message = match stats {
            Some(stats) => {
                totals.add(stats);
                format!(
                    "{source}: {} regions ({} hidden, {} merged)",
                    stats.output, stats.hidden, stats.merged
                )
            }
            None => {
                totals.failed += 1;
                format!("{source}: failed")
            }
        };

        if let Some(bar) = &self.bar {
            bar.set_message(message);
            bar.inc(1);
        }
    }

    /// Totals so far
    pub fn totals(&self) -> PageTotals {
        *self.totals.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Close the bar and return the final totals
    pub fn finish(&self) -> PageTotals {
        let totals = self.totals();
        if let Some(bar) = &self.bar {
            bar.finish_with_message(totals.to_string());
        }
        totals
    }
}
