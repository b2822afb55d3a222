//! Run events for the console front end.
//!
//! The core never prints; it reports through an [`EventSink`] and the CLI
//! turns events into progress lines.

use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::scheduler::{BatchProgress, RunSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// Run started over a catalog of `total` entries.
    Started { total: usize },
    /// A file finished writing.
    FileSaved { path: PathBuf, bytes: u64 },
    /// A file request failed and the file was skipped.
    FileSkipped { url: String, reason: String },
    /// A window settled; emitted before the pause that follows it.
    WindowFlushed(BatchProgress),
    /// The final pause elapsed; nothing else will be emitted.
    Finished(RunSummary),
}

/// Optional event channel. Sending never blocks and never fails the run.
#[derive(Debug, Clone, Default)]
pub struct EventSink(Option<mpsc::UnboundedSender<RunEvent>>);

impl EventSink {
    pub fn new(tx: mpsc::UnboundedSender<RunEvent>) -> Self {
        Self(Some(tx))
    }

    /// Sink that drops every event.
    pub fn none() -> Self {
        Self(None)
    }

    /// Creates a sink plus the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<RunEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub(crate) fn emit(&self, event: RunEvent) {
        if let Some(tx) = &self.0 {
            // Receiver gone means nobody is listening; the run goes on.
            let _ = tx.send(event);
        }
    }
}
