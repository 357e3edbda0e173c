//! `[index]` and `[search]` section configuration.
//!
//! File names are relative to `[build].output`.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[index]` section in almanac.toml - tag and archive index files.
///
/// # Example
/// ```toml
/// [index]
/// tags = "tag-data.json"
/// archives = "archives-data.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Tag index file (normalized tag → count).
    #[serde(default = "defaults::index::tags")]
    #[educe(Default = defaults::index::tags())]
    pub tags: PathBuf,

    /// Archive index file (year → month → count).
    #[serde(default = "defaults::index::archives")]
    #[educe(Default = defaults::index::archives())]
    pub archives: PathBuf,
}

/// `[search]` section - local search document list.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Write the search index during `build`.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub enable: bool,

    /// Search index file.
    #[serde(default = "defaults::search::path")]
    #[educe(Default = defaults::search::path())]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_index_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.index.tags, PathBuf::from("tag-data.json"));
        assert_eq!(config.index.archives, PathBuf::from("archives-data.json"));
        assert!(config.search.enable);
        assert_eq!(config.search.path, PathBuf::from("search.json"));
    }

    #[test]
    fn test_index_config_custom() {
        let config = r#"
            [index]
            tags = "tags.json"
            archives = "data/archives.json"

            [search]
            enable = false
            path = "kbar.json"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.index.tags, PathBuf::from("tags.json"));
        assert_eq!(config.index.archives, PathBuf::from("data/archives.json"));
        assert!(!config.search.enable);
        assert_eq!(config.search.path, PathBuf::from("kbar.json"));
    }

    #[test]
    fn test_partial_index_section_keeps_defaults() {
        let config = r#"
            [index]
            tags = "tags.json"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.index.tags, PathBuf::from("tags.json"));
        assert_eq!(config.index.archives, PathBuf::from("archives-data.json"));
    }
}
