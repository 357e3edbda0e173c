//! `[build]` section configuration.
//!
//! Where content is read from, where index files land, and how documents are
//! filtered and tags normalized.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Enums
// ============================================================================

/// Tag slug generation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Keep non-ASCII letters (e.g., "你好 世界" → "你好-世界") (default).
    #[default]
    Unicode,
    /// Transliterate to ASCII first (e.g., "你好" → "ni-hao").
    Ascii,
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in almanac.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "data/blog"     # Content collection directory
/// output = "app"            # Directory receiving the index files
/// production = true         # Exclude drafts
///
/// [build.slug]
/// mode = "ascii"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content collection directory. Its last component names the collection
    /// (`data/blog` → document paths start with `blog/`).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Directory receiving the tag, archive and search index files.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Content file extensions, without the leading dot.
    #[serde(default = "defaults::build::extensions")]
    #[educe(Default = defaults::build::extensions())]
    pub extensions: Vec<String>,

    /// Production build: drafts are left out of every index.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub production: bool,

    /// Tag slugification settings.
    #[serde(default)]
    pub slug: SlugConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.slug]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SlugConfig {
    /// Slug mode for tag index keys
    #[serde(default = "defaults::build::slug::mode")]
    #[educe(Default = defaults::build::slug::mode())]
    pub mode: SlugMode,
}
