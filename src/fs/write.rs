use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Appends `content` to a text file, creating it with `mode` if absent.
///
/// Open semantics are create+append: existing content is never truncated.
/// The file may have existed before this open with looser permission bits
/// than requested, so `mode` is reapplied after opening regardless of
/// `force_permissions`; the flag records caller intent, not a branch.
///
/// This operation is **not atomic**: a failure after a partial write leaves
/// partial content on disk and no rollback is attempted.
pub fn write_text_file<P: AsRef<Path>>(
    path: P,
    content: &str,
    mode: u32,
    force_permissions: bool,
) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument(
            "path must not be empty".to_string(),
        ));
    }
    let _ = force_permissions;

    let mut options = fs::OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    let mut file = options
        .open(path)
        .map_err(|err| Error::io_path("open", path, err))?;

    set_mode(path, mode)?;

    file.write_all(content.as_bytes())
        .map_err(|err| Error::io_path("write", path, err))?;
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|err| {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Error::PermissionDenied(path.to_path_buf())
        } else {
            Error::io_path("set_permissions", path, err)
        }
    })
}

#[cfg(not(unix))]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    // POSIX mode bits have no portable equivalent here.
    let _ = (path, mode);
    Ok(())
}
