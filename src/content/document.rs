//! Content document model.

use super::TocHeading;
use serde::{Deserialize, Serialize};

/// Average reading speed used for [`ReadingTime`].
const WORDS_PER_MINUTE: usize = 200;

/// One blog post: front-matter metadata plus fields computed at load time.
///
/// This is also the record written to the search index, so field names are
/// serialized in camelCase and the body is never kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub title: String,

    /// Publication date as written in front matter (e.g. `"2024-01-15"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,

    /// Absent means published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Free-form: a single image path or a list of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bibliography: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    /// Collection-relative path without extension, e.g. `"blog/2024/hello"`.
    #[serde(default)]
    pub path: String,

    /// `path` without its collection segment, e.g. `"2024/hello"`.
    #[serde(default)]
    pub slug: String,

    /// Source file relative to the content parent, e.g. `"blog/2024/hello.mdx"`.
    #[serde(default)]
    pub file_path: String,

    #[serde(default)]
    pub reading_time: ReadingTime,

    /// Headings of the body, in document order.
    #[serde(default)]
    pub toc: Vec<TocHeading>,
}

impl ContentDocument {
    pub fn is_draft(&self) -> bool {
        self.draft == Some(true)
    }

    /// Name used in log messages.
    pub fn display_name(&self) -> &str {
        if self.path.is_empty() {
            &self.title
        } else {
            &self.path
        }
    }
}

/// Estimated reading time of a document body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Human readable, e.g. `"3 min read"`.
    pub text: String,
    pub minutes: usize,
    pub words: usize,
}

impl ReadingTime {
    pub fn from_body(body: &str) -> Self {
        let words = count_words(body);
        let minutes = words.div_ceil(WORDS_PER_MINUTE);
        Self {
            text: format!("{minutes} min read"),
            minutes,
            words,
        }
    }
}

/// Whitespace-separated words, with every CJK character counted as a word.
fn count_words(body: &str) -> usize {
    body.split_whitespace()
        .map(|token| {
            let cjk = token.chars().filter(|c| is_cjk(*c)).count();
            let other = token.chars().any(|c| !is_cjk(c) && c.is_alphanumeric());
            cjk + usize::from(other)
        })
        .sum()
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'   // Hiragana, Katakana
        | '\u{3400}'..='\u{4DBF}' // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
        | '\u{AC00}'..='\u{D7AF}' // Hangul
    )
}
