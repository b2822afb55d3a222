//! Batch scheduler.
//!
//! Walks the catalog in fixed-size windows: every entry of a window runs
//! concurrently on the current task, the window is awaited as a whole, progress
//! is reported, then a fixed pause follows before the next window. One failed
//! entry aborts the run.

mod progress;
mod run;
mod window;

pub use progress::{counter_step, BatchProgress, RunSummary};
pub use run::{run_catalog, RunError};
pub use window::{WindowFailure, WindowScheduler};
