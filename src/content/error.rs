//! Per-document load errors.

use std::path::PathBuf;
use thiserror::Error;

/// Why a content file was skipped. None of these abort a build.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` has no front matter block")]
    MissingFrontMatter(PathBuf),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] serde_yaml::Error),

    #[error("`{0}` has no title")]
    MissingTitle(PathBuf),

    #[error("`{0}` is outside the content directory")]
    OutsideContent(PathBuf),

    #[error("failed to walk `{0}`")]
    Walk(PathBuf, #[source] walkdir::Error),
}
