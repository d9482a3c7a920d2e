use std::path::{Path, PathBuf};

use log::{debug, warn};
use tempfile::Builder;

use crate::constants::{DEFAULT_TEMP_DIR_PREFIX, DEFAULT_TEMP_FILE_PREFIX};
use crate::storage::error::{FsError, Result};
use crate::storage::lifecycle::delete;

/// A directory in which persistent temporary files and directories are made.
///
/// Unlike [`tempfile::NamedTempFile`] and [`tempfile::TempDir`], the entries
/// created here outlive their handles; callers clean up with
/// [`TempSpace::delete_temp_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempSpace {
    root: PathBuf,
    file_prefix: String,
    dir_prefix: String,
}

impl Default for TempSpace {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

impl TempSpace {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_prefix: DEFAULT_TEMP_FILE_PREFIX.to_string(),
            dir_prefix: DEFAULT_TEMP_DIR_PREFIX.to_string(),
        }
    }

    pub fn with_file_prefix(mut self, prefix: &str) -> Self {
        self.file_prefix = prefix.to_string();
        self
    }

    pub fn with_dir_prefix(mut self, prefix: &str) -> Self {
        self.dir_prefix = prefix.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a new empty file in the temp root.
    ///
    /// `suffix` is an extension without the leading dot; an empty suffix
    /// produces a name without extension.
    pub fn new_temp_file(&self, suffix: &str) -> Result<PathBuf> {
        let suffix = if suffix.is_empty() { String::new() } else { format!(".{}", suffix) };
        let file = Builder::new()
            .prefix(&self.file_prefix)
            .suffix(&suffix)
            .tempfile_in(&self.root)
            .map_err(|e| FsError::io(e, "create_temp_file", &self.root))?;
        let (_, path) = file
            .keep()
            .map_err(|e| FsError::io(e.error, "keep_temp_file", &self.root))?;
        debug!("Created temp file {}", path.display());
        Ok(path)
    }

    /// Create a new empty directory in the temp root
    pub fn new_temp_dir(&self) -> Result<PathBuf> {
        let dir = Builder::new()
            .prefix(&self.dir_prefix)
            .tempdir_in(&self.root)
            .map_err(|e| FsError::io(e, "create_temp_dir", &self.root))?;
        let path = dir.keep();
        debug!("Created temp dir {}", path.display());
        Ok(path)
    }

    /// Like [`TempSpace::new_temp_dir`], logging the failure instead of returning it
    pub fn try_new_temp_dir(&self) -> Option<PathBuf> {
        match self.new_temp_dir() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Could not create temp dir: {}", e);
                None
            }
        }
    }

    /// Delete the top-level temp entry that contains `path`.
    ///
    /// Walks up from `path` to the ancestor sitting directly in the temp
    /// root and deletes it recursively. Paths outside the root are ignored.
    pub fn delete_temp_files<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut current = path.as_ref();
        loop {
            match current.parent() {
                None => return Ok(()),
                Some(parent) if parent == self.root => return delete(current),
                Some(parent) => current = parent,
            }
        }
    }
}

/// The platform directory used for temporary entries
pub fn temp_root() -> PathBuf {
    std::env::temp_dir()
}

pub fn new_temp_file(suffix: &str) -> Result<PathBuf> {
    TempSpace::default().new_temp_file(suffix)
}

pub fn new_temp_dir() -> Result<PathBuf> {
    TempSpace::default().new_temp_dir()
}

pub fn try_new_temp_dir() -> Option<PathBuf> {
    TempSpace::default().try_new_temp_dir()
}

pub fn delete_temp_files<P: AsRef<Path>>(path: P) -> Result<()> {
    TempSpace::default().delete_temp_files(path)
}
