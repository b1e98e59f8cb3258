use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Checks that `path` names an existing file or directory.
///
/// The empty string is rejected as `InvalidArgument` before touching the
/// filesystem; an absent path fails with `NotFound`. Any other metadata
/// failure (e.g. an unreadable ancestor directory) surfaces as `Io` so
/// callers can tell "definitely absent" apart from "could not determine".
pub fn path_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument(
            "path must not be empty".to_string(),
        ));
    }
    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(Error::NotFound(path.to_path_buf())),
        Err(err) => Err(Error::io_path("metadata", path, err)),
    }
}

/// Checks that the current process may read `path`.
///
/// Requires existence first, so a missing path fails `NotFound` while an
/// existing but inaccessible one fails `PermissionDenied`.
pub fn is_readable<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    path_exists(path)?;
    access(path, AccessMode::Read)
}

/// Checks that the current process may write `path`.
pub fn is_writable<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    path_exists(path)?;
    access(path, AccessMode::Write)
}

#[derive(Debug, Clone, Copy)]
enum AccessMode {
    Read,
    Write,
}

#[cfg(unix)]
fn access(path: &Path, mode: AccessMode) -> Result<()> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| {
        Error::InvalidArgument("path contains interior NUL byte".to_string())
    })?;
    let amode = match mode {
        AccessMode::Read => libc::R_OK,
        AccessMode::Write => libc::W_OK,
    };

    // Safety: `c_path` is a valid NUL-terminated string that outlives the call.
    let rc = unsafe { libc::access(c_path.as_ptr(), amode) };
    if rc == 0 {
        Ok(())
    } else {
        Err(Error::PermissionDenied(path.to_path_buf()))
    }
}

#[cfg(not(unix))]
fn access(path: &Path, mode: AccessMode) -> Result<()> {
    // No access(2) off Unix; approximate with an open attempt / readonly bit.
    match mode {
        AccessMode::Read => match fs::File::open(path) {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                Err(Error::PermissionDenied(path.to_path_buf()))
            }
            Err(err) => Err(Error::io_path("open", path, err)),
        },
        AccessMode::Write => {
            let meta = fs::metadata(path).map_err(|err| Error::io_path("metadata", path, err))?;
            if meta.permissions().readonly() {
                Err(Error::PermissionDenied(path.to_path_buf()))
            } else {
                Ok(())
            }
        }
    }
}
