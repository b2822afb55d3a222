//! Full catalog run: windows of catalog entries, each entry downloading its book files.

use std::io;
use std::path::PathBuf;

use super::progress::RunSummary;
use super::window::WindowScheduler;
use crate::catalog::Catalog;
use crate::entry::{process_entry, BookReport, EntryContext, EntryError};
use crate::events::RunEvent;

/// Fatal run failure. Files already written stay on disk.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("window {window} aborted at {entry}: {source}")]
    Entry {
        window: usize,
        entry: String,
        #[source]
        source: EntryError,
    },
}

/// Processes the whole catalog and returns the per-entry reports in catalog order.
///
/// Emits `Started`, one `WindowFlushed` per window, per-file events, and
/// `Finished` once the pause after the last window has elapsed.
pub async fn run_catalog(
    ctx: &EntryContext,
    scheduler: &WindowScheduler,
    catalog: &Catalog,
) -> Result<(RunSummary, Vec<BookReport>), RunError> {
    let output_dir = ctx.output_dir();
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| RunError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

    let events = ctx.events();
    tracing::info!(
        entries = catalog.len(),
        window_size = scheduler.window_size(),
        pause_ms = scheduler.pause().as_millis() as u64,
        "run started"
    );
    events.emit(RunEvent::Started {
        total: catalog.len(),
    });

    let mut summary = RunSummary::default();
    let reports = scheduler
        .run(
            catalog.entries(),
            |page_url| {
                let page_url = page_url.to_string();
                async move { process_entry(ctx, &page_url).await }
            },
            |progress, reports: &[BookReport]| {
                summary.windows += 1;
                summary.entries += reports.len();
                summary.files_saved += reports.iter().map(BookReport::saved).sum::<usize>();
                summary.files_skipped += reports.iter().map(BookReport::skipped).sum::<usize>();
                events.emit(RunEvent::WindowFlushed(*progress));
            },
        )
        .await
        .map_err(|f| RunError::Entry {
            window: f.window,
            entry: f.entry,
            source: f.error,
        })?;

    tracing::info!(
        windows = summary.windows,
        saved = summary.files_saved,
        skipped = summary.files_skipped,
        "run finished"
    );
    events.emit(RunEvent::Finished(summary));
    Ok((summary, reports))
}
