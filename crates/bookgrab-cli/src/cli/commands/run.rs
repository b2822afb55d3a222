//! `bookgrab run` – download the whole catalog.

use anyhow::Result;
use bookgrab_core::catalog::Catalog;
use bookgrab_core::config::{GrabConfig, ProgressCounting};
use bookgrab_core::entry::EntryContext;
use bookgrab_core::events::{EventSink, RunEvent};
use bookgrab_core::scheduler::{run_catalog, WindowScheduler};
use std::path::PathBuf;

/// Command-line values that replace config values for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub output: Option<PathBuf>,
    pub window: Option<usize>,
    pub pause_ms: Option<u64>,
    pub legacy_progress: bool,
}

impl RunOverrides {
    pub fn apply(self, cfg: &mut GrabConfig) {
        if let Some(dir) = self.output {
            cfg.output_dir = dir;
        }
        if let Some(w) = self.window {
            cfg.window_size = w;
        }
        if let Some(ms) = self.pause_ms {
            cfg.pause_ms = ms;
        }
        if self.legacy_progress {
            cfg.progress_counting = ProgressCounting::Window;
        }
    }
}

/// Console line for an event, if it has one.
pub(crate) fn console_line(event: &RunEvent) -> Option<String> {
    match event {
        RunEvent::Started { .. } => Some("started".to_string()),
        RunEvent::FileSkipped { url, .. } => Some(format!("Can't download file: {}", url)),
        RunEvent::WindowFlushed(progress) => Some(progress.to_string()),
        RunEvent::Finished(_) => Some("finished".to_string()),
        RunEvent::FileSaved { .. } => None,
    }
}

pub async fn run_download(cfg: &GrabConfig, catalog: &Catalog) -> Result<()> {
    cfg.validate()?;
    let (events, mut rx) = EventSink::channel();
    let ctx = EntryContext::new(cfg, events)?;
    let scheduler = WindowScheduler::from_config(cfg);

    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if let Some(line) = console_line(&event) {
                println!("{}", line);
            }
        }
    });

    let result = run_catalog(&ctx, &scheduler, catalog).await;
    // Dropping the context closes the event channel so the printer drains and exits.
    drop(ctx);
    let _ = printer.await;

    let (summary, _reports) = result?;
    tracing::info!(
        "run completed: {} book(s), {} file(s) saved, {} skipped",
        summary.entries,
        summary.files_saved,
        summary.files_skipped
    );
    Ok(())
}
