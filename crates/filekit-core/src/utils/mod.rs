//! # Filekit Path Utilities
//!
//! String-level helpers for file names and extensions, plus the
//! [`syntax`] (Cygwin/Windows), [`relative`] (base + remainder),
//! [`fs`] (listing and search) and [`resource`] (code location) submodules.
//!
//! The string helpers here look at raw text: a "separator" is `/` or the
//! platform separator, and a dot at index 0 never starts an extension, so
//! `.config` has no extension.
pub mod fs;
pub mod relative;
pub mod resource;
pub mod syntax;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use self::syntax::to_cygwin_path;

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Index of the last separator in `s`
fn last_separator(s: &str) -> Option<usize> {
    s.rfind(is_separator)
}

/// Base name of `file` without directory and without its last extension
pub fn file_name(file: &str) -> &str {
    let name = match last_separator(file) {
        Some(i) => &file[i + 1..],
        None => file,
    };
    drop_extension(name)
}

/// [`file_name`] of the path's Cygwin-style string form
pub fn path_file_name<P: AsRef<Path>>(path: P) -> String {
    let cygwin = to_cygwin_path(&path.as_ref().to_string_lossy());
    file_name(&cygwin).to_string()
}

/// Text after the last dot, unless that dot is the first character
pub fn extension(file: &str) -> Option<&str> {
    match file.rfind('.') {
        Some(i) if i > 0 => Some(&file[i + 1..]),
        _ => None,
    }
}

/// Extension of the final component of `path`
pub fn path_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    let name = path.as_ref().file_name()?.to_string_lossy();
    extension(&name).map(str::to_string)
}

/// `file` without its last extension
pub fn drop_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(i) if i > 0 => &file[..i],
        _ => file,
    }
}

/// Final component of `path`, extension included.
///
/// Trailing separators are ignored, so `/a/dir.d/` gives `dir.d`.
pub fn drop_directory<P: AsRef<Path>>(path: P) -> String {
    let cygwin = to_cygwin_path(&path.as_ref().to_string_lossy());
    let trimmed = cygwin.trim_end_matches(is_separator);
    match last_separator(trimmed) {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Swap the extension of the final component, adding one if absent
pub fn replace_extension<P: AsRef<Path>>(path: P, new_extension: &str) -> PathBuf {
    let path = path.as_ref();
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return add_extension(path, new_extension),
    };
    path.with_file_name(format!("{}.{}", drop_extension(&name), new_extension))
}

/// Append `.new_extension` to the path text
pub fn add_extension<P: AsRef<Path>>(path: P, new_extension: &str) -> PathBuf {
    let mut text = path.as_ref().as_os_str().to_os_string();
    text.push(".");
    text.push(new_extension);
    PathBuf::from(text)
}

/// Directory part of `file`; empty when there is none
pub fn drop_filename(file: &str) -> &str {
    match last_separator(file) {
        Some(i) if i > 0 => &file[..i],
        _ => "",
    }
}

/// Name for an entry derived from a hash value.
///
/// Non-negative hashes are tagged with `0`, negative ones with `1` followed
/// by the magnitude, so the name never contains a minus sign.
pub fn hash_file_name(prefix: &str, hash: i32) -> String {
    if hash < 0 {
        format!("{}1{}", prefix, hash.unsigned_abs())
    } else {
        format!("{}0{}", prefix, hash)
    }
}

/// [`hash_file_name`] for the hash of an arbitrary value
pub fn hash_file_name_of<T: Hash + ?Sized>(prefix: &str, value: &T) -> String {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    let full = hasher.finish();
    hash_file_name(prefix, (full ^ (full >> 32)) as i32)
}

/// Convert forward slashes to the platform separator
pub fn native_path(path: &str) -> String {
    path.replace('/', &MAIN_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests;
