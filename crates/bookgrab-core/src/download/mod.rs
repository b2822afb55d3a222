//! File downloader.
//!
//! One streaming GET per file, written straight to the output directory.
//! No temp file, no resume, no retry: a failed request skips the file and
//! the batch carries on, a failed write aborts the batch.

mod file;
mod outcome;

pub use file::download_file;
pub use outcome::{FileOutcome, SkipReason, WriteError};
