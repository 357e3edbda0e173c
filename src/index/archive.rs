//! Archive index: documents counted per year and month.
//!
//! ```text
//! documents ──► include? ──► date (UTC) ──► year/month tally ──► ArchiveIndex
//!                  │              │
//!                  │              ├── no date      → undated
//!                  │              └── unparseable  → malformed
//!                  └── draft in production → skipped
//! ```

use super::{BuildMode, IndexError, writer};
use crate::content::ContentDocument;
use crate::utils::date::{DateError, YearMonth};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;

// ============================================================================
// Persisted Shape
// ============================================================================

/// Documents published in one month of a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEntry {
    /// Two-digit month, `"01"` to `"12"`.
    pub month: String,
    pub count: u32,
}

/// Documents published in one year, broken down by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    /// Four-digit year, e.g. `"2024"`.
    pub year: String,
    /// Always the sum of `months[*].count`.
    pub count: u32,
    /// Newest month first.
    pub months: Vec<MonthEntry>,
}

impl YearEntry {
    #[cfg(test)]
    pub fn month(&self, month: &str) -> Option<&MonthEntry> {
        self.months.iter().find(|entry| entry.month == month)
    }
}

/// The archive file: `{ "archives": [...] }`, newest year first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveIndex {
    pub archives: Vec<YearEntry>,
}

impl ArchiveIndex {
    pub fn is_empty(&self) -> bool {
        self.archives.is_empty()
    }

    /// Number of documents counted across all years.
    pub fn total(&self) -> u32 {
        self.archives.iter().map(|entry| entry.count).sum()
    }

    pub fn year(&self, year: &str) -> Option<&YearEntry> {
        self.archives.iter().find(|entry| entry.year == year)
    }

    /// Combine two partial indexes, summing counts per year and month.
    pub fn merge(self, other: Self) -> Self {
        let mut tally = Tally::default();
        tally.absorb(self);
        tally.absorb(other);
        tally.into_index()
    }

    /// Read a persisted archive index.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        writer::load(path)
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// A document left out of the archive because its date could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedDate {
    /// Document path (or title when the path is unknown).
    pub document: String,
    pub date: String,
    pub error: DateError,
}

/// Archive index together with the documents it could not place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveAggregate {
    pub index: ArchiveIndex,
    pub malformed: Vec<MalformedDate>,
    /// Included documents without any date.
    pub undated: usize,
}

impl ArchiveAggregate {
    /// Combine the aggregates of two disjoint document shards.
    pub fn merge(mut self, other: Self) -> Self {
        self.index = self.index.merge(other.index);
        self.malformed.extend(other.malformed);
        self.undated += other.undated;
        self
    }
}

/// Count included documents per UTC year and month.
///
/// A bad date never aborts the run: the document is recorded in
/// [`ArchiveAggregate::malformed`] and skipped.
pub fn compute_archive_index(documents: &[ContentDocument], mode: BuildMode) -> ArchiveAggregate {
    let mut tally = Tally::default();
    let mut malformed = Vec::new();
    let mut undated = 0;

    for document in documents.iter().filter(|doc| mode.includes(doc)) {
        let Some(date) = document.date.as_deref() else {
            undated += 1;
            continue;
        };

        match YearMonth::parse(date) {
            Ok(ym) => tally.add(ym.year_key(), ym.month_key(), 1),
            Err(error) => malformed.push(MalformedDate {
                document: document.display_name().to_owned(),
                date: date.to_owned(),
                error,
            }),
        }
    }

    ArchiveAggregate {
        index: tally.into_index(),
        malformed,
        undated,
    }
}

// ============================================================================
// Tally
// ============================================================================

/// Temporary year → month → count accumulator.
#[derive(Debug, Default)]
struct Tally(BTreeMap<String, BTreeMap<String, u32>>);

impl Tally {
    fn add(&mut self, year: String, month: String, count: u32) {
        *self.0.entry(year).or_default().entry(month).or_default() += count;
    }

    fn absorb(&mut self, index: ArchiveIndex) {
        for year in index.archives {
            for month in year.months {
                self.add(year.year.clone(), month.month, month.count);
            }
        }
    }

    fn into_index(self) -> ArchiveIndex {
        let mut archives: Vec<_> = self
            .0
            .into_iter()
            .map(|(year, months)| {
                let mut months: Vec<_> = months
                    .into_iter()
                    .map(|(month, count)| MonthEntry { month, count })
                    .collect();
                months.sort_by(|a, b| numeric_desc(&a.month, &b.month));
                let count = months.iter().map(|m| m.count).sum();
                YearEntry {
                    year,
                    count,
                    months,
                }
            })
            .collect();
        archives.sort_by(|a, b| numeric_desc(&a.year, &b.year));

        ArchiveIndex { archives }
    }
}

/// Order keys as descending integers; non-numeric keys sort last.
fn numeric_desc(a: &str, b: &str) -> Ordering {
    match (a.parse::<u32>(), b.parse::<u32>()) {
        (Ok(x), Ok(y)) => y.cmp(&x).then_with(|| b.cmp(a)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => b.cmp(a),
    }
}
