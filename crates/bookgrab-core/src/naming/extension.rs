//! File extension extraction from a file URL.

/// Returns the extension (with leading dot) of the last path segment of `url`,
/// or an empty string when there is none.
///
/// Query and fragment are ignored. A segment that only starts with a dot
/// (e.g. `.bashrc`) has no extension.
pub fn extension_from_url(url: &str) -> String {
    let Ok(parsed) = url::Url::parse(url) else {
        return String::new();
    };
    let Some(segment) = parsed.path().rsplit('/').next() else {
        return String::new();
    };
    match segment.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < segment.len() => segment[idx..].to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_and_epub() {
        assert_eq!(
            extension_from_url("https://link.springer.com/content/pdf/10.1007/978-3-319-29854-2.pdf"),
            ".pdf"
        );
        assert_eq!(
            extension_from_url("https://link.springer.com/download/epub/10.1007/978-3-319-29854-2.epub"),
            ".epub"
        );
    }

    #[test]
    fn ignores_query() {
        assert_eq!(extension_from_url("https://a.test/f/book.pdf?token=1.2"), ".pdf");
    }

    #[test]
    fn no_extension() {
        assert_eq!(extension_from_url("https://a.test/book/10.1007/978-0-387"), "");
        assert_eq!(extension_from_url("https://a.test/"), "");
        assert_eq!(extension_from_url("https://a.test/.hidden"), "");
        assert_eq!(extension_from_url("https://a.test/trailing."), "");
        assert_eq!(extension_from_url("not a url"), "");
    }

    #[test]
    fn only_last_segment_counts() {
        assert_eq!(extension_from_url("https://a.test/v1.2/file"), "");
    }
}
