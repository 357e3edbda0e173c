//! Tag index: normalized tag → number of documents carrying it.

use super::{BuildMode, IndexError, writer};
use crate::config::SlugMode;
use crate::content::ContentDocument;
use crate::utils::slug::slugify_tag;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Tag counts, persisted as a flat JSON object.
///
/// Keys are kept in byte order so the file is stable between builds; ordering
/// by count is left to [`TagIndex::sorted_by_count`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagIndex(BTreeMap<String, u32>);

impl TagIndex {
    #[cfg(test)]
    pub fn get(&self, tag: &str) -> Option<u32> {
        self.0.get(tag).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(tag, count)| (tag.as_str(), *count))
    }

    /// Combine two partial indexes, summing counts of shared tags.
    pub fn merge(mut self, other: Self) -> Self {
        for (tag, count) in other.0 {
            *self.0.entry(tag).or_default() += count;
        }
        self
    }

    /// Entries ordered by count descending, ties by tag name.
    pub fn sorted_by_count(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a_tag, a_count), (b_tag, b_count)| {
            b_count.cmp(a_count).then_with(|| a_tag.cmp(b_tag))
        });
        entries
    }

    /// Read a persisted tag index.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        writer::load(path)
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for TagIndex {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (tag, count) in iter {
            *map.entry(tag.into()).or_default() += count;
        }
        Self(map)
    }
}

/// Count every tag of every included document.
///
/// Tags are normalized with [`slugify_tag`]; a tag that normalizes to nothing
/// (e.g. `"!!!"`) is ignored. Document dates play no part here.
pub fn compute_tag_index(
    documents: &[ContentDocument],
    mode: BuildMode,
    slug_mode: SlugMode,
) -> TagIndex {
    let mut counts: FxHashMap<String, u32> = FxHashMap::default();

    for document in documents.iter().filter(|doc| mode.includes(doc)) {
        for tag in &document.tags {
            let slug = slugify_tag(tag, slug_mode);
            if slug.is_empty() {
                continue;
            }
            *counts.entry(slug).or_default() += 1;
        }
    }

    TagIndex(counts.into_iter().collect())
}
