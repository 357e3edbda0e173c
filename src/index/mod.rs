//! Precomputed indexes over the loaded content documents.
//!
//! Each index is recomputed from scratch on every build and persisted as a
//! JSON side file. Readers (the `archive` and `tags` commands, or a site's
//! UI) consume the files and never re-derive counts from raw content.
//!
//! | Index | File (default) | Shape |
//! |-------|----------------|-------|
//! | [`TagIndex`] | `tag-data.json` | `{ "rust": 3, "go": 1 }` |
//! | [`ArchiveIndex`] | `archives-data.json` | `{ "archives": [{ "year", "count", "months": [{ "month", "count" }] }] }` |
//! | [`SearchIndex`] | `search.json` | `[{ "title", "date", "tags", ... }]` |
//!
//! Aggregation is pure: the same documents and [`BuildMode`] always produce
//! byte-identical files.

mod archive;
mod error;
mod search;
mod tags;
mod writer;

pub use archive::{ArchiveAggregate, ArchiveIndex, compute_archive_index};
#[cfg(test)]
pub use archive::{MonthEntry, YearEntry};
pub use error::IndexError;
pub use search::SearchIndex;
pub use tags::{TagIndex, compute_tag_index};
pub use writer::persist;
#[cfg(test)]
pub use writer::load;

use crate::content::ContentDocument;

/// Which documents a build counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    /// Every document is counted, drafts included.
    #[default]
    Development,
    /// Drafts are excluded from every index.
    Production,
}

impl BuildMode {
    pub const fn from_production(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Inclusion predicate shared by all indexes.
    pub fn includes(self, document: &ContentDocument) -> bool {
        !(self.is_production() && document.is_draft())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}
