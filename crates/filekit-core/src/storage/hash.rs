use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::warn;
use sha1::{Digest, Sha1};

use crate::constants::HASH_BUFFER_SIZE;
use crate::storage::error::{FsError, Result};

/// SHA-1 digest of a file's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileDigest([u8; 20]);

impl FileDigest {
    fn from_slice(digest: &[u8]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(digest);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FileDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Hash an in-memory buffer
pub fn hash_bytes(data: &[u8]) -> FileDigest {
    FileDigest::from_slice(&Sha1::digest(data))
}

/// Stream a file through SHA-1
pub fn file_hash<P: AsRef<Path>>(path: P) -> Result<FileDigest> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| FsError::io(e, "open_read", path))?;
    let mut hasher = Sha1::new();
    let mut buffer = [0u8; HASH_BUFFER_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(|e| FsError::io(e, "read", path))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(FileDigest::from_slice(&hasher.finalize()))
}

/// Like [`file_hash`], logging the failure instead of returning it
pub fn try_file_hash<P: AsRef<Path>>(path: P) -> Option<FileDigest> {
    match file_hash(path.as_ref()) {
        Ok(digest) => Some(digest),
        Err(e) => {
            warn!("Could not hash {}: {}", path.as_ref().display(), e);
            None
        }
    }
}
