use std::path::PathBuf;

use crate::constants::ARCHIVE_MARKERS;
use crate::storage::error::{FsError, Result};

const FILE_SCHEME: &str = "file:";

/// Turn a code-location string into an on-disk path.
///
/// A `file:` scheme is stripped, and a location inside an archive
/// (`.../lib.jar!/pkg/Item`) is cut back to the archive itself. Only absolute
/// results are accepted.
pub fn resource_path(location: &str) -> Option<PathBuf> {
    let mut path = location.strip_prefix(FILE_SCHEME).unwrap_or(location);

    for marker in ARCHIVE_MARKERS {
        if let Some(i) = path.find(marker) {
            // keep the archive extension, drop the '!' and what follows
            path = &path[..i + marker.len() - 1];
            break;
        }
    }

    let path = PathBuf::from(path);
    if path.is_absolute() { Some(path) } else { None }
}

/// On-disk location of the running executable
pub fn current_resource_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| FsError::io(e, "current_exe", PathBuf::new()))?;
    resource_path(&exe.to_string_lossy()).ok_or_else(|| FsError::InvalidPath {
        path: exe,
        reason: "executable location is not an absolute path".to_string(),
    })
}
