//! Output filename derivation.
//!
//! A downloaded file is saved as `<sanitized title><extension of file URL>`.
//! Two books whose titles sanitize to the same stem write to the same path;
//! the later download overwrites the earlier one.

mod extension;
mod sanitize;

pub use extension::extension_from_url;
pub use sanitize::sanitize_title;

use std::path::{Path, PathBuf};

/// Stem used when a title sanitizes to nothing (missing or all-punctuation title).
const DEFAULT_STEM: &str = "untitled";

/// Derives the output filename for one file of a book.
///
/// # Examples
///
/// - `output_file_name("Linear Algebra", "https://x.test/content/pdf/123.pdf")` → `"Linear Algebra.pdf"`
/// - `output_file_name("", "https://x.test/a.epub")` → `"untitled.epub"`
pub fn output_file_name(title: &str, file_url: &str) -> String {
    let stem = sanitize_title(title);
    let stem = if stem.is_empty() { DEFAULT_STEM } else { stem.as_str() };
    format!("{}{}", stem, extension_from_url(file_url))
}

/// Full output path under `output_dir`.
pub fn output_path(output_dir: &Path, title: &str, file_url: &str) -> PathBuf {
    output_dir.join(output_file_name(title, file_url))
}
