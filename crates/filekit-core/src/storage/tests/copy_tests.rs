use std::fs;
use std::io::{self, Cursor, Read};

use tempfile::tempdir;

use crate::storage::copy::{copy_file, copy_relocated, copy_stream};
use crate::storage::error::{FsError, Result};

#[test]
fn test_copy_file_replaces_existing_target() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let from = temp_dir.path().join("from.bin");
    let to = temp_dir.path().join("to.bin");
    fs::write(&from, b"fresh bytes").unwrap();
    fs::write(&to, b"stale content that is longer").unwrap();

    let copied = copy_file(&from, &to)?;

    assert_eq!(copied, 11);
    assert_eq!(fs::read(&to).unwrap(), b"fresh bytes");
    Ok(())
}

#[test]
fn test_copy_file_missing_source() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let result = copy_file(temp_dir.path().join("nope"), temp_dir.path().join("to"));

    let err = result.unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
}

#[test]
fn test_copy_stream() -> Result<()> {
    let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
    let mut reader = Cursor::new(data.clone());
    let mut writer = Vec::new();

    let copied = copy_stream(&mut reader, &mut writer)?;

    assert_eq!(copied, data.len() as u64);
    assert_eq!(writer, data);
    Ok(())
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "upstream closed"))
    }
}

#[test]
fn test_copy_stream_reports_stream_error() {
    let mut writer = Vec::new();

    let err = copy_stream(&mut FailingReader, &mut writer).unwrap_err();

    assert!(matches!(err, FsError::Stream { ref operation, .. } if operation == "copy_stream"));
    assert_eq!(err.io_kind(), Some(io::ErrorKind::BrokenPipe));
    assert!(writer.is_empty());
}

#[test]
fn test_copy_relocated_creates_parents() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let src_root = temp_dir.path().join("src");
    let dst_root = temp_dir.path().join("dst");
    fs::create_dir_all(src_root.join("pkg/sub")).unwrap();
    let file = src_root.join("pkg/sub/Item.out");
    fs::write(&file, "compiled").unwrap();

    let target = copy_relocated(&src_root, &dst_root, &file).expect("file lies under src root");

    assert_eq!(target, dst_root.join("pkg/sub/Item.out"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "compiled");
}

#[test]
fn test_copy_relocated_outside_root() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let src_root = temp_dir.path().join("src");
    let other = temp_dir.path().join("other/file.txt");

    assert!(copy_relocated(&src_root, temp_dir.path().join("dst"), &other).is_none());
}

#[test]
fn test_copy_relocated_missing_source_still_maps() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let src_root = temp_dir.path().join("src");
    let dst_root = temp_dir.path().join("dst");

    let target = copy_relocated(&src_root, &dst_root, src_root.join("ghost.txt"));

    assert_eq!(target, Some(dst_root.join("ghost.txt")));
    assert!(!dst_root.join("ghost.txt").exists());
}
