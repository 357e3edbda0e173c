//! Archive tree and per-period post listing.
//!
//! ```text
//! > ▼ 2024 (7)
//!       November (3)
//!     > January (4)
//!   ► 2023 (1)
//! ```
//!
//! The selected year is expanded; other years stay collapsed unless
//! `--expand-all` is given. Posts of the selection come from the search index.

use crate::{
    config::SiteConfig,
    content::ContentDocument,
    index::{ArchiveIndex, SearchIndex},
    log,
    utils::date::YearMonth,
};
use anyhow::{Context, Result};
use std::{borrow::Cow, fmt::Write};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Year and month picked from an archive URL path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveSelection {
    pub year: Option<String>,
    pub month: Option<String>,
}

impl ArchiveSelection {
    /// Accepts `/archives/2024/11`, `/blog/archives/2024`, `2024/11` or `2024`.
    ///
    /// Everything after the first `archives/` is split positionally: the
    /// first segment is the year and the second the month, so an empty
    /// segment leaves its slot unset (`/archives//11` has no year).
    /// Segments are percent-decoded; anything past the month is ignored.
    pub fn from_path(path: &str) -> Self {
        let rest = match path.find("archives/") {
            Some(at) if at == 0 || path[..at].ends_with('/') => &path[at + "archives/".len()..],
            _ if path.trim_end_matches('/').ends_with("/archives")
                || path.trim_matches('/') == "archives" =>
            {
                ""
            }
            _ => path.strip_prefix('/').unwrap_or(path),
        };

        let mut segments = rest.split('/').map(|segment| {
            Some(segment)
                .filter(|segment| !segment.is_empty())
                .map(decode)
        });

        Self {
            year: segments.next().flatten(),
            month: segments.next().flatten(),
        }
    }

    pub fn is_year_selected(&self, year: &str) -> bool {
        self.year.as_deref() == Some(year)
    }

    pub fn is_month_selected(&self, year: &str, month: &str) -> bool {
        self.is_year_selected(year) && self.month.as_deref() == Some(month)
    }

    /// Whether a post dated `date` falls inside the selection.
    ///
    /// No selection matches every post; undated or malformed posts only
    /// match no selection.
    pub fn matches(&self, date: Option<&str>) -> bool {
        let Some(year) = &self.year else {
            return true;
        };
        let Some(ym) = date.and_then(|d| YearMonth::parse(d).ok()) else {
            return false;
        };
        ym.year_key() == *year && self.month.as_ref().is_none_or(|month| ym.month_key() == *month)
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_owned())
}

/// English name of a two-digit month key (`"03"` → `"March"`).
pub fn month_name(month: &str) -> Option<&'static str> {
    let index = month.parse::<usize>().ok()?;
    MONTH_NAMES.get(index.checked_sub(1)?).copied()
}

/// One page of a listing.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based.
    pub number: usize,
    pub total_pages: usize,
}

/// Slice out page `number` (1-based). Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], number: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);
    let items = if (1..=total_pages).contains(&number) {
        let start = (number - 1) * per_page;
        &items[start..(start + per_page).min(items.len())]
    } else {
        &items[..0]
    };
    Page {
        items,
        number,
        total_pages,
    }
}

/// Posts of the selection, in search index order (newest first).
pub fn select_posts<'a>(
    search: &'a SearchIndex,
    selection: &ArchiveSelection,
) -> Vec<&'a ContentDocument> {
    search
        .entries()
        .iter()
        .filter(|doc| selection.matches(doc.date.as_deref()))
        .collect()
}

/// Render the year/month tree.
pub fn render_tree(index: &ArchiveIndex, selection: &ArchiveSelection, expand_all: bool) -> String {
    let mut out = String::new();
    for year in &index.archives {
        let selected = selection.is_year_selected(&year.year);
        let expanded = expand_all || selected;
        let _ = writeln!(
            out,
            "{} {} {} ({})",
            cursor(selected && selection.month.is_none()),
            if expanded { '▼' } else { '►' },
            year.year,
            year.count
        );
        if !expanded {
            continue;
        }
        for month in &year.months {
            let name = month_name(&month.month).unwrap_or(month.month.as_str());
            let _ = writeln!(
                out,
                "    {} {} ({})",
                cursor(selection.is_month_selected(&year.year, &month.month)),
                name,
                month.count
            );
        }
    }
    out
}

fn cursor(selected: bool) -> char {
    if selected { '>' } else { ' ' }
}

/// Render one page of posts: `date  title  [tags]`.
pub fn render_posts(page: &Page<'_, &ContentDocument>) -> String {
    let mut out = String::new();
    for doc in page.items {
        let date = doc.date.as_deref().unwrap_or("----------");
        let _ = write!(out, "{date}  {}", doc.title);
        if !doc.tags.is_empty() {
            let _ = write!(out, "  [{}]", doc.tags.join(", "));
        }
        out.push('\n');
    }
    if page.total_pages > 1 {
        let _ = writeln!(out, "page {}/{}", page.number, page.total_pages);
    }
    out
}

/// `archive` command: print the tree and the selected posts.
pub fn show(config: &SiteConfig, path: Option<&str>, page: usize, expand_all: bool) -> Result<()> {
    let archives_path = config.archives_path();
    let index = ArchiveIndex::load(&archives_path)
        .with_context(|| "archive index unavailable, run `almanac build` first")?;
    let selection = path.map(ArchiveSelection::from_path).unwrap_or_default();

    if index.is_empty() {
        log!("archive"; "archive index is empty");
    } else if let Some(year) = &selection.year
        && index.year(year).is_none()
    {
        log!("warn"; "no archived posts for `{}`", year);
    }

    print!("{}", render_tree(&index, &selection, expand_all));

    let search_path = config.search_path();
    if !config.search.enable || !search_path.is_file() {
        log!("archive"; "search index not available, post listing skipped");
        return Ok(());
    }
    let search = SearchIndex::load(&search_path)?;
    if search.is_empty() {
        log!("archive"; "search index is empty, no posts to list");
        return Ok(());
    }
    let posts = select_posts(&search, &selection);
    let page = paginate(&posts, page, config.archives.posts_per_page);

    if page.items.is_empty() {
        log!("archive"; "no posts on page {} of {}", page.number, page.total_pages);
        return Ok(());
    }
    println!();
    print!("{}", render_posts(&page));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{BuildMode, compute_archive_index};

    fn doc(title: &str, date: Option<&str>) -> ContentDocument {
        ContentDocument {
            title: title.into(),
            date: date.map(String::from),
            ..Default::default()
        }
    }

    fn sample_docs() -> Vec<ContentDocument> {
        vec![
            doc("Jan", Some("2024-01-05")),
            doc("Nov", Some("2024-11-20")),
            doc("Jun", Some("2023-06-01")),
            doc("Undated", None),
        ]
    }

    fn selection(year: Option<&str>, month: Option<&str>) -> ArchiveSelection {
        ArchiveSelection {
            year: year.map(String::from),
            month: month.map(String::from),
        }
    }

    #[test]
    fn test_selection_from_path() {
        assert_eq!(
            ArchiveSelection::from_path("/archives/2024/11"),
            selection(Some("2024"), Some("11"))
        );
        assert_eq!(
            ArchiveSelection::from_path("/archives/2024"),
            selection(Some("2024"), None)
        );
        assert_eq!(
            ArchiveSelection::from_path("2024/03/"),
            selection(Some("2024"), Some("03"))
        );
        assert_eq!(ArchiveSelection::from_path("/archives"), ArchiveSelection::default());
        assert_eq!(ArchiveSelection::from_path("/archives/"), ArchiveSelection::default());
        assert_eq!(ArchiveSelection::from_path(""), ArchiveSelection::default());
    }

    #[test]
    fn test_selection_after_archives_segment() {
        assert_eq!(
            ArchiveSelection::from_path("/blog/archives/2024"),
            selection(Some("2024"), None)
        );
        assert_eq!(
            ArchiveSelection::from_path("archives/2024/05"),
            selection(Some("2024"), Some("05"))
        );
        assert_eq!(ArchiveSelection::from_path("/blog/archives"), ArchiveSelection::default());
        // `myarchives/` is not an archives segment
        assert_eq!(
            ArchiveSelection::from_path("/myarchives/2024"),
            selection(Some("myarchives"), Some("2024"))
        );
    }

    #[test]
    fn test_selection_keeps_empty_slots() {
        let sel = ArchiveSelection::from_path("/archives//11");
        assert_eq!(sel, selection(None, Some("11")));
        assert!(!sel.is_month_selected("2024", "11"));
        assert!(sel.matches(Some("2023-02-01")));
    }

    #[test]
    fn test_selection_percent_decoded() {
        let sel = ArchiveSelection::from_path("/archives/%32%30%32%34/%30%31");
        assert_eq!(sel, selection(Some("2024"), Some("01")));
    }

    #[test]
    fn test_selected_by_string_equality() {
        let sel = selection(Some("2024"), Some("01"));
        assert!(sel.is_year_selected("2024"));
        assert!(sel.is_month_selected("2024", "01"));
        assert!(!sel.is_month_selected("2024", "1"));
        assert!(!sel.is_month_selected("2023", "01"));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name("01"), Some("January"));
        assert_eq!(month_name("12"), Some("December"));
        assert_eq!(month_name("00"), None);
        assert_eq!(month_name("13"), None);
        assert_eq!(month_name("xx"), None);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=12).collect();

        let first = paginate(&items, 1, 5);
        assert_eq!(first.items, &[1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, 5);
        assert_eq!(last.items, &[11, 12]);

        assert!(paginate(&items, 0, 5).items.is_empty());
        assert!(paginate(&items, 4, 5).items.is_empty());

        let empty = paginate::<u32>(&[], 1, 5);
        assert_eq!(empty.total_pages, 0);
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_select_posts_uses_utc_month() {
        let mut docs = sample_docs();
        // 2024-12-01T01:30Z in UTC
        docs.push(doc("Nov late", Some("2024-11-30T23:30:00-02:00")));
        let search = SearchIndex::compute(&docs, BuildMode::Development);

        let nov = select_posts(&search, &selection(Some("2024"), Some("11")));
        let titles: Vec<_> = nov.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["Nov"]);

        let dec = select_posts(&search, &selection(Some("2024"), Some("12")));
        assert_eq!(dec[0].title, "Nov late");
    }

    #[test]
    fn test_select_posts_by_year_and_all() {
        let search = SearchIndex::compute(&sample_docs(), BuildMode::Development);

        let year = select_posts(&search, &selection(Some("2024"), None));
        assert_eq!(year.len(), 2);

        let all = select_posts(&search, &ArchiveSelection::default());
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_render_tree() {
        let index = compute_archive_index(&sample_docs(), BuildMode::Development).index;

        let collapsed = render_tree(&index, &ArchiveSelection::default(), false);
        assert_eq!(collapsed, "  ► 2024 (2)\n  ► 2023 (1)\n");

        let selected = render_tree(&index, &selection(Some("2024"), Some("01")), false);
        assert_eq!(
            selected,
            "  ▼ 2024 (2)\n      November (1)\n    > January (1)\n  ► 2023 (1)\n"
        );

        let year_only = render_tree(&index, &selection(Some("2023"), None), true);
        assert!(year_only.contains("> ▼ 2023 (1)\n      June (1)\n"));
        assert!(year_only.contains("  ▼ 2024 (2)\n"));
    }

    #[test]
    fn test_render_posts() {
        let docs = [
            ContentDocument {
                title: "Hello".into(),
                date: Some("2024-01-05".into()),
                tags: vec!["rust".into(), "web".into()],
                ..Default::default()
            },
            doc("Undated", None),
        ];
        let refs: Vec<_> = docs.iter().collect();

        let page = paginate(&refs, 1, 5);
        assert_eq!(
            render_posts(&page),
            "2024-01-05  Hello  [rust, web]\n----------  Undated\n"
        );

        let page = paginate(&refs, 2, 1);
        assert_eq!(render_posts(&page), "----------  Undated\npage 2/2\n");
    }
}
