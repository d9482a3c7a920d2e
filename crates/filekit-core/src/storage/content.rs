use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::storage::error::{FsError, Result};
use crate::storage::lifecycle::create_file;

/// Replace the content of `path`, creating the file and its parents if needed
pub fn write_to_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> Result<()> {
    let path = path.as_ref();
    create_file(path)?;
    fs::write(path, content.as_ref()).map_err(|e| FsError::io(e, "write", path))
}

/// Write `lines` separated by `\n`, without a trailing newline
pub fn write_lines<P, S>(path: P, lines: &[S]) -> Result<()>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let joined = lines.iter().map(|l| l.as_ref()).collect::<Vec<_>>().join("\n");
    write_to_file(path, joined)
}

/// Append text to a file, creating it if missing
pub fn append_to_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> Result<()> {
    let path = path.as_ref();
    create_file(path)?;
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| FsError::io(e, "open_append", path))?;
    file.write_all(content.as_ref()).map_err(|e| FsError::io(e, "append", path))
}

/// Insert `head` before the current content of `path`.
///
/// The combined content is written to a temp file next to the resolved
/// target (symlinks are followed) which then atomically replaces it, keeping
/// the target's permissions. A missing file is treated as empty.
pub fn prepend_to_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, head: C) -> Result<()> {
    let path = path.as_ref();
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(FsError::io(e, "canonicalize", path)),
    };
    let dir = match target.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => dir,
        None => Path::new("."),
    };

    let original = match File::open(&target) {
        Ok(file) => Some(file),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(FsError::io(e, "open_read", &target)),
    };
    let mut temp_file =
        NamedTempFile::new_in(dir).map_err(|e| FsError::io(e, "create_temp_file", dir))?;

    temp_file
        .write_all(head.as_ref())
        .map_err(|e| FsError::io(e, "write_to_temp_file", temp_file.path()))?;

    if let Some(mut original) = original {
        io::copy(&mut original, &mut temp_file)
            .map_err(|e| FsError::io(e, "copy_to_temp_file", temp_file.path()))?;
        let permissions = original
            .metadata()
            .map_err(|e| FsError::io(e, "metadata", &target))?
            .permissions();
        temp_file
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| FsError::io(e, "set_permissions", temp_file.path()))?;
    }

    // Persist the temporary file, atomically replacing the target file
    temp_file
        .persist(&target)
        .map_err(|e| FsError::io(e.error, "persist_temp_file", &target))?;
    debug!("Prepended content to {}", target.display());
    Ok(())
}

/// Read a whole file into memory
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| FsError::io(e, "read_to_bytes", path))
}

/// Read a whole file as UTF-8 text
pub fn read_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| FsError::io(e, "read_to_string", path))
}

/// Read a file line by line, without line terminators
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FsError::io(e, "open_read", path))?;
    BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| FsError::io(e, "read_lines", path))
}

/// Drain a reader into a string
pub fn read_stream_string<R: Read + ?Sized>(reader: &mut R) -> Result<String> {
    let mut data = String::new();
    reader
        .read_to_string(&mut data)
        .map_err(|e| FsError::stream(e, "read_stream"))?;
    Ok(data)
}
