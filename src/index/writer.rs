//! Canonical JSON output and atomic index files.
//!
//! Index files are pretty-printed with two-space indentation and end with a
//! newline. A file is replaced by renaming a fully written temporary file from
//! the same directory over it, so readers only ever see a complete document.

use super::IndexError;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Render an index in its canonical on-disk form.
pub fn to_json<T: Serialize + ?Sized>(index: &T) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(index)?;
    json.push('\n');
    Ok(json)
}

/// Write an index to `destination`, replacing any previous file.
///
/// The destination directory must already exist. Nothing is retried.
pub fn persist<T: Serialize + ?Sized>(index: &T, destination: &Path) -> Result<(), IndexError> {
    let json = to_json(index).map_err(|err| IndexError::Serialize(destination.into(), err))?;
    let write_err = |err| IndexError::Write(destination.into(), err);

    let dir = destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    set_readable(file.path()).map_err(write_err)?;
    file.persist(destination).map_err(|err| write_err(err.error))?;

    Ok(())
}

/// Read and decode an index file.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, IndexError> {
    let content = fs::read_to_string(path).map_err(|err| IndexError::Read(path.into(), err))?;
    serde_json::from_str(&content).map_err(|err| IndexError::Parse(PathBuf::from(path), err))
}

/// Temporary files are created owner-only; index files are served as static data.
#[cfg(unix)]
fn set_readable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
