//! Portable filename sanitization for book titles.

/// Longest stem kept, in bytes. Leaves room for an extension under NAME_MAX (255).
const STEM_MAX: usize = 200;

/// Characters rejected by at least one common filesystem (NTFS, FAT, ext4).
fn is_reserved(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || c.is_control()
}

/// Sanitizes a book title for use as a filename stem.
///
/// - Turns any whitespace run (newlines and tabs included) into one space
/// - Replaces `< > : " / \ | ? *`, NUL and other control characters with `_`,
///   collapsing consecutive replacements
/// - Trims leading/trailing whitespace, dots and underscores
/// - Limits length to 200 bytes on a char boundary
///
/// Returns an empty string when nothing usable remains; callers pick a fallback.
pub fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_underscore = false;
    let mut prev_space = false;

    for c in title.chars() {
        if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
            prev_underscore = false;
        } else if is_reserved(c) {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
            prev_space = false;
        } else {
            out.push(c);
            prev_underscore = false;
            prev_space = false;
        }
    }

    let trimmed = out.trim_matches(|c: char| c == ' ' || c == '.' || c == '_');

    if trimmed.len() > STEM_MAX {
        let mut take = STEM_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].trim_end().to_string()
    } else {
        trimmed.to_string()
    }
}
