//! Streaming GET of one file into the output directory.

use futures_util::StreamExt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::outcome::{FileOutcome, SkipReason, WriteError};
use crate::events::{EventSink, RunEvent};
use crate::fetch::HttpClient;
use crate::naming;

/// Downloads `url` to `<output_dir>/<sanitized name><ext>`.
///
/// The output file is created (truncated) before the request is sent and the
/// body is written chunk by chunk as it arrives. A failed request, a non-2xx
/// status or a body that stops mid-transfer is logged and returned as
/// [`FileOutcome::Skipped`]; the (possibly empty) file is left behind.
/// Only local I/O failures are returned as `Err`.
pub async fn download_file(
    client: &HttpClient,
    output_dir: &Path,
    name: &str,
    url: &str,
    events: &EventSink,
) -> Result<FileOutcome, WriteError> {
    let path = naming::output_path(output_dir, name, url);
    let mut file = File::create(&path)
        .await
        .map_err(|source| WriteError::Create {
            path: path.clone(),
            source,
        })?;

    let skip = |reason: SkipReason| -> Result<FileOutcome, WriteError> {
        tracing::warn!(url, %reason, "can't download file");
        events.emit(RunEvent::FileSkipped {
            url: url.to_string(),
            reason: reason.to_string(),
        });
        Ok(FileOutcome::Skipped {
            url: url.to_string(),
            reason,
        })
    };

    tracing::debug!(url, path = %path.display(), "downloading file");
    let response = match client.inner().get(url).send().await {
        Ok(r) => r,
        Err(e) => return skip(SkipReason::Request(e.to_string())),
    };
    let status = response.status();
    if !status.is_success() {
        return skip(SkipReason::Status(status.as_u16()));
    }

    let mut stream = response.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => return skip(SkipReason::Interrupted(e.to_string())),
        };
        file.write_all(&chunk)
            .await
            .map_err(|source| WriteError::Write {
                path: path.clone(),
                source,
            })?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(url, bytes = written, "file saved");
    events.emit(RunEvent::FileSaved {
        path: path.clone(),
        bytes: written,
    });
    Ok(FileOutcome::Saved {
        path,
        bytes: written,
    })
}
