//! Site configuration management for `almanac.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[build]`    | Content/output paths, production mode, slugs   |
//! | `[index]`    | Tag and archive index file names               |
//! | `[search]`   | Search index generation                        |
//! | `[archives]` | Archive listing (pagination)                   |
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "data/blog"
//! output = "app"
//! production = true
//!
//! [index]
//! tags = "tag-data.json"
//! archives = "archives-data.json"
//!
//! [search]
//! path = "search.json"
//!
//! [archives]
//! posts_per_page = 5
//! ```
//!
//! The file is optional: every field has a default.

mod archives;
mod build;
pub mod defaults;
mod error;
mod index;

pub use build::SlugMode;

use archives::ArchivesConfig;
use build::BuildConfig;
use error::ConfigError;
use index::{IndexConfig, SearchConfig};

use crate::cli::{Cli, Commands};
use crate::index::BuildMode;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing almanac.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Content and output settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Tag and archive index files
    #[serde(default)]
    pub index: IndexConfig,

    /// Search index settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Archive listing settings
    #[serde(default)]
    pub archives: ArchivesConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Whether drafts are excluded from this build.
    pub const fn mode(&self) -> BuildMode {
        BuildMode::from_production(self.build.production)
    }

    /// Absolute path of the tag index file.
    pub fn tags_path(&self) -> PathBuf {
        self.build.output.join(&self.index.tags)
    }

    /// Absolute path of the archive index file.
    pub fn archives_path(&self) -> PathBuf {
        self.build.output.join(&self.index.archives)
    }

    /// Absolute path of the search index file.
    pub fn search_path(&self) -> PathBuf {
        self.build.output.join(&self.search.path)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        self.update_path_with_root(&root, cli);

        if let Commands::Build { production, search } = &cli.command {
            // The flag can only switch production on; the file decides otherwise.
            if *production {
                self.build.production = true;
            }
            Self::update_option(&mut self.search.enable, search.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values that serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if self.archives.posts_per_page == 0 {
            bail!(ConfigError::Validation(
                "[archives.posts_per_page] must be greater than 0".into()
            ));
        }

        if self.build.extensions.is_empty() {
            bail!(ConfigError::Validation(
                "[build.extensions] must have at least one element".into()
            ));
        }

        if self
            .build
            .extensions
            .iter()
            .any(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            bail!(ConfigError::Validation(
                "[build.extensions] entries must be non-empty and without a leading dot".into()
            ));
        }

        let mut outputs = vec![
            ("[index.tags]", &self.index.tags),
            ("[index.archives]", &self.index.archives),
        ];
        if self.search.enable {
            outputs.push(("[search.path]", &self.search.path));
        }
        for (i, (field, path)) in outputs.iter().enumerate() {
            if let Some((other, _)) = outputs[..i].iter().find(|(_, p)| p == path) {
                bail!(ConfigError::Validation(format!(
                    "{field} and {other} point to the same file `{}`",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("almanac").chain(args.iter().copied()))
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = SiteConfig::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode(), BuildMode::Development);
    }

    #[test]
    fn test_unknown_section_rejection() {
        let result = SiteConfig::from_str("[deploy]\nforce = true");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&dir.path().join("almanac.toml")).unwrap_err();
        assert!(format!("{err}").contains("almanac.toml"));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("almanac.toml");
        fs::write(&path, "[build]\nproduction = true\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.mode(), BuildMode::Production);
    }

    #[test]
    fn test_update_with_cli_resolves_paths_against_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["--root", root, "build"]));

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root.as_path());
        assert_eq!(config.build.content, root.join("data/blog"));
        assert_eq!(config.build.output, root.join("app"));
        assert_eq!(config.config_path, root.join("almanac.toml"));
        assert_eq!(config.tags_path(), root.join("app/tag-data.json"));
        assert_eq!(config.archives_path(), root.join("app/archives-data.json"));
        assert_eq!(config.search_path(), root.join("app/search.json"));
    }

    #[test]
    fn test_update_with_cli_overrides_directories() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&[
            "--root", root, "--content", "posts", "--output", "public", "build",
        ]));

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.build.content, root.join("posts"));
        assert_eq!(config.build.output, root.join("public"));
    }

    #[test]
    fn test_production_flag() {
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["build"]));
        assert_eq!(config.mode(), BuildMode::Development);

        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["build", "--production"]));
        assert_eq!(config.mode(), BuildMode::Production);
    }

    #[test]
    fn test_production_from_file_survives_cli() {
        let mut config = SiteConfig::from_str("[build]\nproduction = true").unwrap();
        config.update_with_cli(&cli(&["build"]));
        assert_eq!(config.mode(), BuildMode::Production);
    }

    #[test]
    fn test_search_flag() {
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["build", "--search", "false"]));
        assert!(!config.search.enable);

        let mut config = SiteConfig::from_str("[search]\nenable = false").unwrap();
        config.update_with_cli(&cli(&["build", "--search"]));
        assert!(config.search.enable);
    }

    #[test]
    fn test_validate_posts_per_page() {
        let config = SiteConfig::from_str("[archives]\nposts_per_page = 0").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("posts_per_page"));
    }

    #[test]
    fn test_validate_extensions() {
        let config = SiteConfig::from_str("[build]\nextensions = []").unwrap();
        assert!(config.validate().is_err());

        let config = SiteConfig::from_str("[build]\nextensions = [\".md\"]").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_duplicate_outputs() {
        let config = SiteConfig::from_str(
            "[index]\ntags = \"data.json\"\narchives = \"data.json\"",
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("same file"));

        let config = SiteConfig::from_str("[search]\npath = \"tag-data.json\"").unwrap();
        assert!(config.validate().is_err());

        // A disabled search index does not claim its path
        let config =
            SiteConfig::from_str("[search]\nenable = false\npath = \"tag-data.json\"").unwrap();
        assert!(config.validate().is_ok());
    }
}
