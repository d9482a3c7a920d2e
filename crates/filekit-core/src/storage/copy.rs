use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::storage::error::{FsError, Result};
use crate::storage::lifecycle::create_dir;
use crate::utils::relative::relative_path;

/// Copy a file, replacing the target if it exists. Returns the bytes copied.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<u64> {
    let (from, to) = (from.as_ref(), to.as_ref());
    let copied = fs::copy(from, to).map_err(|e| FsError::io(e, "copy", from))?; // Report error with source path
    debug!("Copied {} -> {} ({} bytes)", from.display(), to.display(), copied);
    Ok(copied)
}

/// Pump every byte from `reader` into `writer`
pub fn copy_stream<R: Read + ?Sized, W: Write + ?Sized>(reader: &mut R, writer: &mut W) -> Result<u64> {
    let copied = io::copy(reader, writer).map_err(|e| FsError::stream(e, "copy_stream"))?;
    writer.flush().map_err(|e| FsError::stream(e, "flush_stream"))?;
    Ok(copied)
}

/// Copy `file` from under `from_root` to the same relative spot under `to_root`.
///
/// Returns `None` when `file` does not lie under `from_root`. Otherwise the
/// target path is returned even if the source is missing or the copy fails;
/// failures are logged.
pub fn copy_relocated<P, Q, F>(from_root: P, to_root: Q, file: F) -> Option<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: AsRef<Path>,
{
    let source = relative_path(from_root.as_ref(), file.as_ref())?;
    let target = source.rebase(to_root.as_ref());
    let target_path = target.absolute();

    if !source.absolute().exists() {
        return Some(target_path);
    }

    let result = match target_path.parent() {
        Some(parent) => create_dir(parent),
        None => Ok(()),
    }
    .and_then(|_| copy_file(source.absolute(), &target_path));

    if let Err(e) = result {
        warn!("Failed to copy {} to {}: {}", source, target_path.display(), e);
    }
    Some(target_path)
}
