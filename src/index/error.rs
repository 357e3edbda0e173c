//! Index persistence errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing or reading an index file.
///
/// Aggregation itself never fails; only the file system side does.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to write index `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to serialize index for `{0}`")]
    Serialize(PathBuf, #[source] serde_json::Error),

    #[error("failed to read index `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("index `{0}` is not valid JSON for its shape")]
    Parse(PathBuf, #[source] serde_json::Error),
}

impl IndexError {
    /// File the failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Write(path, _)
            | Self::Serialize(path, _)
            | Self::Read(path, _)
            | Self::Parse(path, _) => path,
        }
    }
}
