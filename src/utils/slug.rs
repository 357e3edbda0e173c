//! Tag slugification.
//!
//! Tags are free text in front matter (`"Rust"`, `"rust "`, `"Web Dev"`) and are
//! folded to one URL-safe key before counting.

use crate::config::SlugMode;

/// Convert a tag to its normalized slug.
///
/// Letters are lower-cased; every run of whitespace or punctuation becomes a
/// single `-`; leading and trailing separators are dropped. `Ascii` mode
/// transliterates first.
pub fn slugify_tag(tag: &str, mode: SlugMode) -> String {
    match mode {
        SlugMode::Unicode => slugify_unicode(tag),
        SlugMode::Ascii => slug::slugify(tag),
    }
}

/// `slug::slugify` without transliteration: non-ASCII letters are kept.
fn slugify_unicode(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
