//! Book metadata extraction from catalog page markup.

use crate::config::SelectorConfig;
use scraper::{Html, Selector};

/// Title and file references of one catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookRecord {
    /// Display name; empty when the page has no title element.
    pub name: String,
    /// Link targets of the file anchors, in document order. Usually site-relative.
    pub files: Vec<String>,
}

/// A configured selector failed to parse.
#[derive(Debug, thiserror::Error)]
#[error("invalid {which} selector {selector:?}: {reason}")]
pub struct ExtractError {
    pub which: &'static str,
    pub selector: String,
    pub reason: String,
}

/// Compiled selectors. Built once per run and shared by every entry.
#[derive(Debug, Clone)]
pub struct Extractor {
    title: Selector,
    file_links: Selector,
}

fn compile(which: &'static str, selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError {
        which,
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl Extractor {
    pub fn new(selectors: &SelectorConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            title: compile("title", &selectors.title)?,
            file_links: compile("file_links", &selectors.file_links)?,
        })
    }

    /// Extracts the book record from `html`. A page without matches yields an
    /// empty title and no files; that is not an error.
    pub fn extract(&self, html: &str) -> BookRecord {
        let doc = Html::parse_document(html);

        let name = doc
            .select(&self.title)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
            .trim()
            .to_string();

        let files = doc
            .select(&self.file_links)
            .filter_map(|el| el.value().attr("href"))
            .map(str::to_string)
            .collect();

        BookRecord { name, files }
    }
}
