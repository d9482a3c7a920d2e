use std::fmt;
use std::path::{Path, PathBuf};

/// A path expressed as a base directory plus a remainder below it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath {
    base: PathBuf,
    relative: PathBuf,
}

impl RelativePath {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(base: P, relative: Q) -> Self {
        Self { base: base.into(), relative: relative.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Base and remainder joined
    pub fn absolute(&self) -> PathBuf {
        if self.relative.as_os_str().is_empty() {
            self.base.clone()
        } else {
            self.base.join(&self.relative)
        }
    }

    /// The same remainder below a different base
    pub fn rebase<P: Into<PathBuf>>(&self, base: P) -> Self {
        Self { base: base.into(), relative: self.relative.clone() }
    }

    /// A child entry of this path, keeping the same base
    pub fn join<P: AsRef<Path>>(&self, child: P) -> Self {
        Self { base: self.base.clone(), relative: self.relative.join(child) }
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.absolute().display())
    }
}

/// Express `full` relative to `base`, or `None` if it does not lie below it.
///
/// The comparison is component-wise: `/a/bc` is not below `/a/b`.
pub fn relative_path<P: AsRef<Path>, Q: AsRef<Path>>(base: P, full: Q) -> Option<RelativePath> {
    let (base, full) = (base.as_ref(), full.as_ref());
    full.strip_prefix(base)
        .ok()
        .map(|rest| RelativePath::new(base, rest))
}

/// The remainder of `path` below `base` if it lies there, else `path` itself
pub fn try_relative_string<P: AsRef<Path>, Q: AsRef<Path>>(base: P, path: Q) -> String {
    match relative_path(base.as_ref(), path.as_ref()) {
        Some(rel) => rel.relative().to_string_lossy().into_owned(),
        None => path.as_ref().to_string_lossy().into_owned(),
    }
}
