//! Index build orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_documents() ──► parse content files in parallel
//!     │
//!     └── build_indexes()
//!             │
//!             ├── rayon::join
//!             │       ├── tag index      (sharded, merged)
//!             │       └── archive index  (sharded, merged)
//!             │
//!             ├── search index (when enabled)
//!             │
//!             └── persist each index ──► output directory
//! ```
//!
//! Every index is rebuilt from scratch; nothing from a previous run is read.

use crate::{
    config::SiteConfig,
    content::{ContentDocument, load_documents},
    index::{
        ArchiveAggregate, BuildMode, IndexError, SearchIndex, TagIndex, compute_archive_index,
        compute_tag_index, persist,
    },
    log,
    logger::error_chain,
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;
use std::{fs, path::PathBuf};

/// Documents per aggregation shard.
const SHARD_SIZE: usize = 256;

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub tags: TagIndex,
    pub archive: ArchiveAggregate,
    pub search: Option<SearchIndex>,
    /// Drafts left out because of production mode.
    pub excluded_drafts: usize,
    /// Index files written, in write order.
    pub written: Vec<PathBuf>,
}

impl BuildReport {
    /// One-line outcome for the final log entry.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} tags, {} archived posts",
            self.tags.len(),
            self.archive.index.total()
        );
        if let Some(search) = &self.search {
            summary.push_str(&format!(", {} search entries", search.len()));
        }
        if self.excluded_drafts > 0 {
            summary.push_str(&format!(", {} drafts excluded", self.excluded_drafts));
        }
        summary.push_str(&format!(", {} files written", self.written.len()));
        summary
    }
}

/// Load the content collection and write all indexes.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let loaded = load_documents(config);
    build_indexes(config, &loaded.documents)
}

/// Aggregate `documents` and persist every index under the output directory.
///
/// Bad dates and empty input are reported, not raised. A failed write is
/// fatal, but the remaining indexes are still attempted first so a single
/// bad destination does not leave the others stale.
pub fn build_indexes(config: &SiteConfig, documents: &[ContentDocument]) -> Result<BuildReport> {
    let mode = config.mode();
    let output = &config.build.output;

    log!("build"; "indexing {} documents ({})", documents.len(), mode.name());
    if documents.is_empty() {
        log!("warn"; "no documents found, writing empty indexes");
    }

    let excluded_drafts = documents.iter().filter(|doc| !mode.includes(doc)).count();
    if excluded_drafts > 0 {
        log!("build"; "excluded {} drafts", excluded_drafts);
    }

    let (tags, archive) = rayon::join(
        || aggregate_tags(config, documents, mode),
        || aggregate_archive(documents, mode),
    );
    if archive.index.is_empty() {
        log!("archive"; "no dated posts to archive");
    }
    for skipped in &archive.malformed {
        log!("warn"; "`{}` left out of archive: {}", skipped.document, skipped.error);
    }
    if archive.undated > 0 {
        log!("archive"; "{} documents have no date", archive.undated);
    }

    let search = config
        .search
        .enable
        .then(|| SearchIndex::compute(documents, mode));

    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory `{}`", output.display()))?;

    let mut writes = vec![
        write_index(&tags, config.tags_path()),
        write_index(&archive.index, config.archives_path()),
    ];
    if let Some(search) = &search {
        writes.push(write_index(search, config.search_path()));
    }

    let mut written = Vec::new();
    let mut failed = Vec::new();
    for (path, result) in writes {
        match result {
            Ok(()) => {
                log!("write"; "{}", path.display());
                written.push(path);
            }
            Err(err) => {
                log!("error"; "{}", error_chain(&err));
                failed.push(err.path().to_owned());
            }
        }
    }

    if !failed.is_empty() {
        let paths: Vec<_> = failed
            .iter()
            .map(|path| format!("`{}`", path.display()))
            .collect();
        bail!("failed to write index files: {}", paths.join(", "));
    }

    Ok(BuildReport {
        tags,
        archive,
        search,
        excluded_drafts,
        written,
    })
}

fn write_index<T: Serialize + ?Sized>(
    index: &T,
    path: PathBuf,
) -> (PathBuf, Result<(), IndexError>) {
    let result = persist(index, &path);
    (path, result)
}

fn aggregate_tags(config: &SiteConfig, documents: &[ContentDocument], mode: BuildMode) -> TagIndex {
    let slug_mode = config.build.slug.mode;
    documents
        .par_chunks(SHARD_SIZE)
        .map(|shard| compute_tag_index(shard, mode, slug_mode))
        .reduce(TagIndex::default, TagIndex::merge)
}

fn aggregate_archive(documents: &[ContentDocument], mode: BuildMode) -> ArchiveAggregate {
    documents
        .par_chunks(SHARD_SIZE)
        .map(|shard| compute_archive_index(shard, mode))
        .reduce(ArchiveAggregate::default, ArchiveAggregate::merge)
}
