/// Prefix for temporary files
pub const DEFAULT_TEMP_FILE_PREFIX: &str = "filekit";

/// Prefix for temporary directories
pub const DEFAULT_TEMP_DIR_PREFIX: &str = "FileKit";

/// Prefix for files named after a hash value
pub const DEFAULT_HASHED_FILE_PREFIX: &str = "filekit";

/// Prefix for directories named after a hash value
pub const DEFAULT_HASHED_DIR_PREFIX: &str = "FileKit";

/// Chunk size used when streaming file content through a digest
pub const HASH_BUFFER_SIZE: usize = 8192;

/// Markers after which a code location points inside an archive
pub const ARCHIVE_MARKERS: &[&str] = &[".jar!", ".zip!"];
