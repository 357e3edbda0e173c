//! Content discovery and parsing.
//!
//! Walks the content collection directory, parses each matching file in
//! parallel and returns documents in file-name order. A file that cannot be
//! turned into a document is skipped with a warning; it never fails the run.

use super::{
    ContentDocument, ContentError, ReadingTime,
    frontmatter::{self, FrontMatter},
    toc,
};
use crate::{config::SiteConfig, log, logger::error_chain};
use rayon::prelude::*;
use std::{
    ffi::OsStr,
    fs,
    path::{Component, Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

/// Result of loading a content collection.
#[derive(Debug, Default)]
pub struct LoadedContent {
    pub documents: Vec<ContentDocument>,
    pub skipped: Vec<ContentError>,
}

/// Load every document of the configured collection.
pub fn load_documents(config: &SiteConfig) -> LoadedContent {
    let root = &config.build.content;
    if !root.is_dir() {
        log!("warn"; "content directory `{}` not found, nothing to index", root.display());
        return LoadedContent::default();
    }

    let (files, walk_errors) = collect_files(root, &config.build.extensions);
    let results: Vec<_> = files
        .par_iter()
        .map(|source| read_document(source, root))
        .collect();

    let mut loaded = LoadedContent {
        skipped: walk_errors,
        ..Default::default()
    };
    for result in results {
        match result {
            Ok(document) => loaded.documents.push(document),
            Err(err) => {
                log!("skip"; "{}", error_chain(&err));
                loaded.skipped.push(err);
            }
        }
    }

    log!(
        "content";
        "loaded {} documents from `{}` ({} skipped)",
        loaded.documents.len(),
        root.display(),
        loaded.skipped.len()
    );
    loaded
}

/// Content files under `root`, sorted by path. Hidden entries are ignored.
///
/// Entries the walk cannot read are logged and returned beside the files.
pub fn collect_files(root: &Path, extensions: &[String]) -> (Vec<PathBuf>, Vec<ContentError>) {
    let mut files = Vec::new();
    let mut errors = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                let path = entry.into_path();
                if has_extension(&path, extensions) {
                    files.push(path);
                }
            }
            Ok(_) => {}
            Err(err) => {
                let path = err.path().unwrap_or(root).to_owned();
                let err = ContentError::Walk(path, err);
                log!("skip"; "{}", error_chain(&err));
                errors.push(err);
            }
        }
    }

    (files, errors)
}

/// Read and parse one content file.
pub fn read_document(source: &Path, root: &Path) -> Result<ContentDocument, ContentError> {
    let text = fs::read_to_string(source).map_err(|err| ContentError::Io(source.into(), err))?;
    parse_document(&text, source, root)
}

/// Build a document from file text. `source` must live under `root`.
pub fn parse_document(
    text: &str,
    source: &Path,
    root: &Path,
) -> Result<ContentDocument, ContentError> {
    let paths =
        DocumentPaths::new(source, root).ok_or_else(|| ContentError::OutsideContent(source.into()))?;
    let (yaml, body) =
        frontmatter::split(text).ok_or_else(|| ContentError::MissingFrontMatter(source.into()))?;
    let meta =
        FrontMatter::parse(yaml).map_err(|err| ContentError::FrontMatter(source.into(), err))?;

    let title = meta
        .title
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| ContentError::MissingTitle(source.into()))?;

    Ok(ContentDocument {
        title,
        date: meta.date,
        tags: meta.tags.unwrap_or_default(),
        lastmod: meta.lastmod,
        draft: meta.draft,
        summary: meta.summary,
        images: meta.images,
        authors: meta.authors.unwrap_or_default(),
        layout: meta.layout,
        bibliography: meta.bibliography,
        canonical_url: meta.canonical_url,
        path: paths.path,
        slug: paths.slug,
        file_path: paths.file_path,
        reading_time: ReadingTime::from_body(body),
        toc: toc::extract_headings(body),
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// URL-style paths derived from a file's location in the collection.
///
/// For `data/blog/2024/hello.mdx`: path `blog/2024/hello`, slug `2024/hello`,
/// file path `blog/2024/hello.mdx`. A trailing `index` file maps to its directory.
#[derive(Debug, PartialEq, Eq)]
struct DocumentPaths {
    path: String,
    slug: String,
    file_path: String,
}

impl DocumentPaths {
    fn new(source: &Path, root: &Path) -> Option<Self> {
        let relative = source.strip_prefix(root).ok()?;
        if relative.as_os_str().is_empty() {
            return None;
        }
        let collection = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        let mut segments: Vec<String> = collection
            .into_iter()
            .chain(relative.components().filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            }))
            .collect();
        let file_path = segments.join("/");

        let stem = segments
            .last()
            .and_then(|last| Path::new(last).file_stem())
            .map(|stem| stem.to_string_lossy().into_owned());
        if let (Some(stem), Some(last)) = (stem, segments.last_mut()) {
            *last = stem;
        }
        if segments.len() > 1 && segments.last().is_some_and(|last| last == "index") {
            segments.pop();
        }

        let path = segments.join("/");
        let slug = match segments.split_first() {
            Some((_, rest)) if !rest.is_empty() => rest.join("/"),
            _ => path.clone(),
        };

        Some(Self {
            path,
            slug,
            file_path,
        })
    }
}
