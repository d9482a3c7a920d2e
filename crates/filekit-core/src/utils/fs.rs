use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::storage::error::{FsError, Result};
use crate::utils::relative::RelativePath;

/// Filter applied to directory entries while listing
pub type EntryFilter<'a> = &'a dyn Fn(&Path) -> bool;

/// Entries of `dir`, sorted by file name
fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}

/// A directory reached without following a symlink
fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Immediate children of `dir` that pass `filter`, relative to `dir`
pub fn list_files<P: AsRef<Path>>(dir: P, filter: Option<EntryFilter<'_>>) -> Result<Vec<RelativePath>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(FsError::NotADirectory(dir.to_path_buf()));
    }

    let entries = sorted_entries(dir).map_err(|e| FsError::io(e, "read_dir", dir))?;
    Ok(entries
        .into_iter()
        .filter(|p| filter.is_none_or(|f| f(p.as_path())))
        .filter_map(|p| p.file_name().map(|name| RelativePath::new(dir, name)))
        .collect())
}

/// Every descendant of `dir` that passes `filter`, relative to `dir`.
///
/// Directories are descended into whether or not they pass the filter
/// themselves. Symlinked directories are listed but not followed. An
/// unreadable `dir` yields an empty list.
pub fn list_files_recursive<P: AsRef<Path>>(dir: P, filter: Option<EntryFilter<'_>>) -> Vec<RelativePath> {
    let root = RelativePath::new(dir.as_ref(), "");
    let mut result = Vec::new();
    collect_recursive(&root, filter, &mut result);
    result
}

fn collect_recursive(current: &RelativePath, filter: Option<EntryFilter<'_>>, result: &mut Vec<RelativePath>) {
    let dir = current.absolute();
    let entries = match sorted_entries(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };

    for path in entries {
        let Some(name) = path.file_name() else { continue };
        let rel = current.join(name);
        if filter.is_none_or(|f| f(path.as_path())) {
            result.push(rel.clone());
        }
        if is_real_dir(&path) {
            collect_recursive(&rel, filter, result);
        }
    }
}

/// First `search_dir/filename` that exists, as an absolute path
pub fn find_file<P: AsRef<Path>>(filename: &str, search_dirs: &[P]) -> Option<PathBuf> {
    search_dirs
        .iter()
        .map(|dir| dir.as_ref().join(filename))
        .find(|candidate| candidate.exists())
        .map(|found| std::path::absolute(&found).unwrap_or(found))
}

/// Find files recursively in a directory that match a predicate.
///
/// Symlinked directories are not descended into.
pub fn find_files<P, F>(path: P, predicate: &F) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool + ?Sized,
{
    let path = path.as_ref();
    let mut result = Vec::new();

    if !path.exists() {
        return Ok(result);
    }

    if path.is_file() {
        if predicate(path) {
            result.push(path.to_path_buf());
        }
        return Ok(result);
    }

    for entry_path in sorted_entries(path).map_err(|e| FsError::io(e, "read_dir", path))? {
        if entry_path.is_file() {
            if predicate(&entry_path) {
                result.push(entry_path);
            }
        } else if is_real_dir(&entry_path) {
            result.append(&mut find_files(&entry_path, predicate)?);
        }
    }

    Ok(result)
}

/// Find files with a specific extension, ignoring case
pub fn find_files_with_extension<P: AsRef<Path>>(path: P, extension: &str) -> Result<Vec<PathBuf>> {
    let wanted = extension.to_lowercase();
    find_files(path, &move |p: &Path| match p.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase() == wanted,
        None => false,
    })
}
