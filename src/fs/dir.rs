use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::exists::path_exists;

/// Checks that `path` resolves to a directory.
pub fn is_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    path_exists(path)?;
    let meta = fs::metadata(path).map_err(|err| Error::io_path("metadata", path, err))?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(Error::NotADirectory(path.to_path_buf()))
    }
}

/// Returns the directory containing `path`.
///
/// Asking for the parent of something that is already a directory is a
/// caller error and fails with `IsADirectory`; the directory is never passed
/// through as if it were its own parent.
pub fn parent_directory<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if is_directory(path).is_ok() {
        return Err(Error::IsADirectory(path.to_path_buf()));
    }
    Ok(path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .to_path_buf())
}

/// Lists the immediate children of a directory, each as a full path.
///
/// Fails with `NotFound` if the path is absent and `NotADirectory` if it
/// names a regular file. No ordering is guaranteed; callers must not rely on
/// a stable order across filesystems.
pub fn list_directory<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    path_exists(path)?;
    let meta = fs::metadata(path).map_err(|err| Error::io_path("metadata", path, err))?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }

    let mut children = Vec::new();
    let entries = fs::read_dir(path).map_err(|err| Error::io_path("read_dir", path, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| Error::io_path("read_dir", path, err))?;
        children.push(entry.path());
    }
    Ok(children)
}
