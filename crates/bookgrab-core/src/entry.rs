//! Per-entry orchestration: load one catalog page, then download every file it links.

use anyhow::Context;
use futures_util::future::join_all;
use std::path::{Path, PathBuf};
use url::Url;

use crate::config::GrabConfig;
use crate::download::{download_file, FileOutcome, SkipReason, WriteError};
use crate::events::{EventSink, RunEvent};
use crate::extract::{BookRecord, Extractor};
use crate::fetch::{FetchError, HttpClient};

/// Failure of one catalog entry. Aborts the window it belongs to.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("{page_url}: {source}")]
    Write {
        page_url: String,
        #[source]
        source: WriteError,
    },
}

/// Everything that happened to one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReport {
    pub page_url: String,
    pub book: BookRecord,
    /// One outcome per file reference, in document order.
    pub files: Vec<FileOutcome>,
}

impl BookReport {
    pub fn saved(&self) -> usize {
        self.files.iter().filter(|f| f.is_saved()).count()
    }

    pub fn skipped(&self) -> usize {
        self.files.len() - self.saved()
    }
}

/// Shared, read-only state for processing entries. One per run.
#[derive(Debug, Clone)]
pub struct EntryContext {
    client: HttpClient,
    extractor: Extractor,
    base_url: Url,
    output_dir: PathBuf,
    events: EventSink,
}

impl EntryContext {
    pub fn new(cfg: &GrabConfig, events: EventSink) -> anyhow::Result<Self> {
        let client = HttpClient::new(cfg).context("failed to build HTTP client")?;
        let extractor = Extractor::new(&cfg.selectors)?;
        let base_url = Url::parse(&cfg.base_url)
            .with_context(|| format!("invalid base_url: {}", cfg.base_url))?;
        Ok(Self {
            client,
            extractor,
            base_url,
            output_dir: cfg.output_dir.clone(),
            events,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn events(&self) -> &EventSink {
        &self.events
    }

    /// Fetches `page_url` and extracts its book record, without downloading anything.
    pub async fn book_info(&self, page_url: &str) -> Result<BookRecord, FetchError> {
        let html = self.client.fetch_page(page_url).await?;
        Ok(self.extractor.extract(&html))
    }

    /// Absolute URL of a file reference found on a page.
    pub fn resolve_file_url(&self, href: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(href)
    }
}

/// Processes one catalog entry.
///
/// A page that fails to load fails the entry. Otherwise one download per
/// file reference runs concurrently (no limit within an entry) and the entry
/// settles once every download has. Skipped files are reported in the
/// returned [`BookReport`]; the first write failure, if any, is returned
/// after all sibling downloads have settled.
pub async fn process_entry(ctx: &EntryContext, page_url: &str) -> Result<BookReport, EntryError> {
    let book = ctx.book_info(page_url).await?;
    tracing::info!(page_url, title = %book.name, files = book.files.len(), "book page parsed");

    let name = book.name.as_str();
    let downloads = book.files.iter().map(move |href| async move {
        match ctx.resolve_file_url(href) {
            Ok(url) => {
                download_file(&ctx.client, &ctx.output_dir, name, url.as_str(), &ctx.events).await
            }
            Err(e) => {
                let reason = SkipReason::Request(format!("bad file link: {}", e));
                tracing::warn!(page_url, href = %href, %reason, "can't download file");
                ctx.events.emit(RunEvent::FileSkipped {
                    url: href.clone(),
                    reason: reason.to_string(),
                });
                Ok(FileOutcome::Skipped {
                    url: href.clone(),
                    reason,
                })
            }
        }
    });

    let mut files = Vec::with_capacity(book.files.len());
    let mut first_error = None;
    for result in join_all(downloads).await {
        match result {
            Ok(outcome) => files.push(outcome),
            Err(e) => {
                tracing::error!(page_url, error = %e, "file write failed");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }
    if let Some(source) = first_error {
        return Err(EntryError::Write {
            page_url: page_url.to_string(),
            source,
        });
    }

    Ok(BookReport {
        page_url: page_url.to_string(),
        book,
        files,
    })
}
