//! YAML front matter extraction.
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-15
//! tags: [rust, web]
//! ---
//! body...
//! ```

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static RE_FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\x{FEFF}?---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Raw front-matter fields. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub tags: Option<Vec<String>>,
    pub lastmod: Option<String>,
    pub draft: Option<bool>,
    pub summary: Option<String>,
    pub images: Option<serde_json::Value>,
    pub authors: Option<Vec<String>>,
    pub layout: Option<String>,
    pub bibliography: Option<String>,
    #[serde(rename = "canonicalUrl")]
    pub canonical_url: Option<String>,
}

impl FrontMatter {
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}

/// Split a document into its front-matter block and body.
///
/// Returns `None` when the text does not start with a `---` fenced block.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let captures = RE_FRONT_MATTER.captures(text)?;
    let whole = captures.get(0)?;
    let yaml = captures.get(1).map_or("", |m| m.as_str());
    Some((yaml, &text[whole.end()..]))
}
