//! Ordered list of catalog page URLs processed by a run.
//!
//! The built-in list ships with the binary; a plain-text catalog file
//! (one URL per line, `#` comments) can replace it for a single run.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Catalog pages processed when no catalog file is given.
const BUILTIN_CATALOG: &[&str] = &[
    "https://link.springer.com/book/10.1007/978-0-387-21736-9",
    "https://link.springer.com/book/10.1007/978-1-4614-7138-7",
    "https://link.springer.com/book/10.1007/978-3-319-29854-2",
    "https://link.springer.com/book/10.1007/978-1-4471-5134-8",
    "https://link.springer.com/book/10.1007/978-3-662-49851-4",
    "https://link.springer.com/book/10.1007/978-3-319-58487-4",
    "https://link.springer.com/book/10.1007/978-0-387-45528-0",
];

/// Immutable, ordered list of catalog page URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<String>,
}

impl Catalog {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_CATALOG.iter().map(|s| s.to_string()).collect())
    }

    /// Parses catalog text: one absolute URL per line, blank lines and `#` comments skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            url::Url::parse(line)
                .with_context(|| format!("line {}: invalid URL {:?}", lineno + 1, line))?;
            entries.push(line.to_string());
        }
        Ok(Self::new(entries))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid catalog {}", path.display()))
    }

    /// Catalog from `path` if given, otherwise the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
