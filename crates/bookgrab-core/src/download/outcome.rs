//! Result types for a single file download.
//!
//! Request-phase failures are an `Ok(FileOutcome::Skipped)`; local I/O
//! failures are `Err(WriteError)`. The two never share a channel.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a file was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Request failed before a response arrived (connection, DNS, TLS, timeout).
    Request(String),
    /// Server answered with a non-2xx status.
    Status(u16),
    /// Response body stopped mid-transfer. The output file keeps what was written.
    Interrupted(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Request(e) => write!(f, "request failed: {}", e),
            SkipReason::Status(code) => write!(f, "HTTP {}", code),
            SkipReason::Interrupted(e) => write!(f, "transfer interrupted: {}", e),
        }
    }
}

/// Settled state of one file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Saved { path: PathBuf, bytes: u64 },
    Skipped { url: String, reason: SkipReason },
}

impl FileOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, FileOutcome::Saved { .. })
    }
}

/// Local write failure. Fatal to the owning catalog entry and the run.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write to {} failed: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
