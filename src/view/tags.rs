//! Tag listing, most used first.

use crate::{config::SiteConfig, index::TagIndex, log};
use anyhow::{Context, Result};
use std::fmt::Write;

/// Render `tag  count` lines, names padded to a common width.
pub fn render(index: &TagIndex, limit: Option<usize>) -> String {
    let tags: Vec<_> = index
        .sorted_by_count()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();
    let width = tags.iter().map(|(tag, _)| tag.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (tag, count) in tags {
        let _ = writeln!(out, "{tag:<width$}  {count}");
    }
    out
}

/// `tags` command.
pub fn show(config: &SiteConfig, limit: Option<usize>) -> Result<()> {
    let index = TagIndex::load(&config.tags_path())
        .with_context(|| "tag index unavailable, run `almanac build` first")?;

    if index.is_empty() {
        log!("tags"; "no tags");
        return Ok(());
    }
    print!("{}", render(&index, limit));
    log!("tags"; "{} distinct tags", index.len());
    Ok(())
}
