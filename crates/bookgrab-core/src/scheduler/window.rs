//! Fixed-window batch runner.
//!
//! Entries are started in catalog order, `window_size` at a time. A window is
//! flushed (joined on the current task) when it is full or when the last entry
//! has been added. After every flush the done counter advances, the flush
//! callback runs, and the runner sleeps for `pause`, including after the
//! final window. Window N+1 never starts before window N has fully settled.

use futures_util::future::join_all;
use std::future::Future;
use std::time::Duration;

use super::progress::{counter_step, BatchProgress};
use crate::config::{GrabConfig, ProgressCounting};

/// An entry failed; the run stops after its window.
#[derive(Debug)]
pub struct WindowFailure<E> {
    /// 1-based window index.
    pub window: usize,
    pub entry: String,
    pub error: E,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowScheduler {
    window_size: usize,
    pause: Duration,
    counting: ProgressCounting,
}

impl WindowScheduler {
    /// A `window_size` of 0 is treated as 1.
    pub fn new(window_size: usize, pause: Duration, counting: ProgressCounting) -> Self {
        Self {
            window_size: window_size.max(1),
            pause,
            counting,
        }
    }

    pub fn from_config(cfg: &GrabConfig) -> Self {
        Self::new(cfg.window_size, cfg.pause(), cfg.progress_counting)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Number of flushes for a catalog of `len` entries: ceil(len / window_size).
    pub fn window_count(&self, len: usize) -> usize {
        len.div_ceil(self.window_size)
    }

    /// Runs `work` over `entries` window by window.
    ///
    /// Returns every entry's output in catalog order. If any entry in a window
    /// fails, the rest of that window still settles, then the first failure
    /// (in catalog order) is returned and no later window starts.
    pub async fn run<T, E, F, Fut, P>(
        &self,
        entries: &[String],
        mut work: F,
        mut on_flush: P,
    ) -> Result<Vec<T>, WindowFailure<E>>
    where
        F: FnMut(&str) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: FnMut(&BatchProgress, &[T]),
        E: std::fmt::Display,
    {
        let total = entries.len();
        let mut outputs = Vec::with_capacity(total);
        let mut window = Vec::with_capacity(self.window_size);
        let mut window_entries = Vec::with_capacity(self.window_size);
        let mut done = 0usize;
        let mut window_index = 0usize;

        for (index, entry) in entries.iter().enumerate() {
            window.push(work(entry.as_str()));
            window_entries.push(entry.as_str());

            if window.len() < self.window_size && index + 1 < total {
                continue;
            }

            window_index += 1;
            tracing::debug!(window = window_index, entries = window.len(), "flushing window");
            let results = join_all(window.drain(..)).await;
            let flushed = results.len();

            let first_offset = outputs.len();
            let mut failure = None;
            for (entry, result) in window_entries.drain(..).zip(results) {
                match result {
                    Ok(out) => outputs.push(out),
                    Err(error) => {
                        tracing::error!(window = window_index, entry, %error, "entry failed");
                        if failure.is_none() {
                            failure = Some(WindowFailure {
                                window: window_index,
                                entry: entry.to_string(),
                                error,
                            });
                        }
                    }
                }
            }
            if let Some(f) = failure {
                return Err(f);
            }

            done += counter_step(self.counting, self.window_size, flushed);
            let progress = BatchProgress {
                window: window_index,
                done,
                total,
            };
            tracing::info!(window = window_index, %progress, "window done");
            on_flush(&progress, &outputs[first_offset..]);

            tokio::time::sleep(self.pause).await;
        }

        Ok(outputs)
    }
}
