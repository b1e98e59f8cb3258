use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

use super::exists::path_exists;

/// Reads the entire content of a regular file into memory.
///
/// Failure kinds stay distinct: `NotFound` when the path is absent, `Io`
/// tagged `open` when the file cannot be opened, `Io` tagged `read` when a
/// read error truncates the content. There is no streaming path; memory use
/// is bounded only by the file size.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    path_exists(path)?;

    let mut file = fs::File::open(path).map_err(|err| Error::io_path("open", path, err))?;
    let meta = file
        .metadata()
        .map_err(|err| Error::io_path("metadata", path, err))?;

    let mut bytes = Vec::with_capacity(usize::try_from(meta.len()).unwrap_or(0));
    file.read_to_end(&mut bytes)
        .map_err(|err| Error::io_path("read", path, err))?;
    Ok(bytes)
}
