//! Search index: the core metadata of every post, newest first.
//!
//! Client-side search loads this file once and filters it in the browser; the
//! archive listing reuses it to show the posts of a selected year or month.

use super::{BuildMode, IndexError, writer};
use crate::content::ContentDocument;
use crate::utils::date::parse_utc;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::path::Path;

/// Persisted as a JSON array of documents (metadata only, no body).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex(Vec<ContentDocument>);

impl SearchIndex {
    /// Collect included documents, newest first.
    ///
    /// Documents with a parseable date come before the rest; equal dates and
    /// undated documents are ordered by title.
    pub fn compute(documents: &[ContentDocument], mode: BuildMode) -> Self {
        let mut entries: Vec<_> = documents
            .iter()
            .filter(|doc| mode.includes(doc))
            .cloned()
            .collect();

        entries.sort_by_cached_key(|doc| {
            let date = doc.date.as_deref().and_then(|d| parse_utc(d).ok());
            (date.is_none(), Reverse(date), doc.title.clone())
        });

        Self(entries)
    }

    pub fn entries(&self) -> &[ContentDocument] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read a persisted search index.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        writer::load(path)
    }
}
