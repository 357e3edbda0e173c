//! Table of contents extracted from a markdown body.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One heading: its plain text, the `#anchor` it links to and its level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocHeading {
    pub value: String,
    pub url: String,
    /// 1 for `#`, up to 6.
    pub depth: u8,
}

/// Collect every ATX and setext heading of `body`.
///
/// Inline markup is reduced to its text. Headings inside code blocks are
/// not headings. Repeated anchors are numbered: a second `Intro` gets `#intro-1`.
pub fn extract_headings(body: &str) -> Vec<TocHeading> {
    let mut anchors = Anchors::default();
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((level as u8, String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, value)) = &mut current {
                    value.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((depth, value)) = current.take() {
                    let value = value.trim().to_owned();
                    let url = format!("#{}", anchors.next(&value));
                    headings.push(TocHeading { value, url, depth });
                }
            }
            _ => {}
        }
    }

    headings
}

/// Heading anchors, unique within one document.
#[derive(Debug, Default)]
struct Anchors {
    seen: FxHashMap<String, usize>,
}

impl Anchors {
    fn next(&mut self, value: &str) -> String {
        let base = anchor(value);
        let mut slug = base.clone();
        while self.seen.contains_key(&slug) {
            let count = self.seen.entry(base.clone()).or_default();
            *count += 1;
            slug = format!("{base}-{count}");
        }
        self.seen.insert(slug.clone(), 0);
        slug
    }
}

/// Lowercase, spaces to `-`, punctuation other than `-` and `_` dropped.
fn anchor(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}
