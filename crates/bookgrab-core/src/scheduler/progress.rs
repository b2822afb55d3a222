//! Progress reporting after each window and the end-of-run summary.

use std::fmt;

use crate::config::ProgressCounting;

/// Snapshot taken right after a window settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchProgress {
    /// 1-based index of the window that just settled.
    pub window: usize,
    /// Entries counted as done so far (see [`ProgressCounting`]).
    pub done: usize,
    /// Catalog length.
    pub total: usize,
}

impl BatchProgress {
    /// Percent done. Can exceed 100 under [`ProgressCounting::Window`].
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.done as f64 / self.total as f64 * 100.0
    }
}

/// `<done>/<total> - <percent>%` with two decimals, e.g. `3/7 - 42.86%`.
impl fmt::Display for BatchProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} - {:.2}%", self.done, self.total, self.percent())
    }
}

/// Amount the done counter grows after flushing `flushed` entries of a
/// window of `window_size`.
pub fn counter_step(counting: ProgressCounting, window_size: usize, flushed: usize) -> usize {
    match counting {
        ProgressCounting::Exact => flushed,
        ProgressCounting::Window => window_size,
    }
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub windows: usize,
    pub entries: usize,
    pub files_saved: usize,
    pub files_skipped: usize,
}
