use std::fs::{self, File, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::debug;

use crate::storage::error::{FsError, Result};
use crate::utils::hash_file_name;

/// Recursively delete a file or a directory tree.
///
/// Symlinks are removed themselves and never followed. Deleting a path that
/// does not exist succeeds.
pub fn delete<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FsError::io(e, "delete", path)),
    };

    if meta.is_dir() {
        for entry in fs::read_dir(path).map_err(|e| FsError::io(e, "read_dir", path))? {
            let entry = entry.map_err(|e| FsError::io(e, "read_dir_entry", path))?;
            delete(entry.path())?;
        }
        remove_ignoring_missing(fs::remove_dir(path), "remove_dir", path)?;
    } else {
        remove_ignoring_missing(fs::remove_file(path), "remove_file", path)?;
    }

    debug!("Deleted {}", path.display());
    Ok(())
}

fn remove_ignoring_missing(result: io::Result<()>, operation: &str, path: &Path) -> Result<()> {
    match result {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(FsError::io(e, operation, path)),
        _ => Ok(()),
    }
}

/// Create an empty file, along with any missing parent directories.
///
/// An existing file keeps its content.
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| FsError::io(e, "create_file", path))?;
    Ok(())
}

/// Create a file in `dir` whose name is derived from `hash`
pub fn create_hashed_file<P: AsRef<Path>>(dir: P, hash: i32, prefix: &str) -> Result<PathBuf> {
    let path = dir.as_ref().join(hash_file_name(prefix, hash));
    create_file(&path)?;
    Ok(path)
}

/// Create a directory and all of its parents.
///
/// An existing directory is fine. A non-directory sitting at `path` gives
/// [`FsError::CreateDirFailed`]; every other failure is reported as `Io`.
pub fn create_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(_) if path.is_dir() => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            Err(FsError::CreateDirFailed(path.to_path_buf()))
        }
        Err(e) => Err(FsError::io(e, "create_dir", path)),
    }
}

/// Create a directory in `dir` whose name is derived from `hash`
pub fn create_hashed_dir<P: AsRef<Path>>(dir: P, hash: i32, prefix: &str) -> Result<PathBuf> {
    let path = dir.as_ref().join(hash_file_name(prefix, hash));
    create_dir(&path)?;
    Ok(path)
}

/// Check if a path exists
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Check if a path exists and is a regular file
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Whether `file` was modified strictly after `than`.
///
/// A file whose modification time cannot be read counts as modified at the
/// Unix epoch.
pub fn is_modified_later<P: AsRef<Path>, Q: AsRef<Path>>(file: P, than: Q) -> bool {
    modified_or_epoch(file.as_ref()) > modified_or_epoch(than.as_ref())
}

fn modified_or_epoch(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Whether the file at `path` has no content
pub fn is_empty_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| FsError::io(e, "open_read", path))?;
    let mut byte = [0u8; 1];
    let read = file.read(&mut byte).map_err(|e| FsError::io(e, "read", path))?;
    Ok(read == 0)
}
