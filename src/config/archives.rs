//! `[archives]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[archives]` section in almanac.toml - archive listing settings.
///
/// # Example
/// ```toml
/// [archives]
/// posts_per_page = 10
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ArchivesConfig {
    /// Posts listed per page under a selected year or month.
    #[serde(default = "defaults::archives::posts_per_page")]
    #[educe(Default = defaults::archives::posts_per_page())]
    pub posts_per_page: usize,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_archives_config_default() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.archives.posts_per_page, 5);
    }

    #[test]
    fn test_archives_config_custom() {
        let config: SiteConfig = toml::from_str("[archives]\nposts_per_page = 12").unwrap();
        assert_eq!(config.archives.posts_per_page, 12);
    }
}
