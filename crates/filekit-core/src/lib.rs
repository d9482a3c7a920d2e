pub mod constants;
pub mod storage;
pub mod utils;

// Re-export the helpers callers reach for most
pub use storage::content::{
    append_to_file, prepend_to_file, read_bytes, read_lines, read_stream_string, read_string,
    write_lines, write_to_file,
};
pub use storage::copy::{copy_file, copy_relocated, copy_stream};
pub use storage::hash::{file_hash, hash_bytes, try_file_hash};
pub use storage::lifecycle::{
    create_dir, create_file, create_hashed_dir, create_hashed_file, delete, exists, file_exists,
    is_empty_file, is_modified_later,
};
pub use storage::temp::{delete_temp_files, new_temp_dir, new_temp_file, temp_root, try_new_temp_dir};
pub use storage::{ConfigFormat, FileDigest, FsConfig, FsError, Result, TempSpace};
pub use utils::fs::{find_file, list_files, list_files_recursive};
pub use utils::relative::{relative_path, try_relative_string, RelativePath};
pub use utils::resource::{current_resource_path, resource_path};
pub use utils::syntax::{to_cygwin_path, to_windows_path, HostOs};
