//! File handle operations against the host filesystem

use fstree::{FileHandle, FsError, IoOp, OsFileSystem};
use std::fs;
use tempfile::TempDir;

fn handle(path: impl AsRef<std::path::Path>) -> FileHandle {
    FileHandle::new(&OsFileSystem, path).unwrap()
}

#[test]
fn copy_preserves_bytes() {
    let temp = TempDir::new().unwrap();
    let dest_dir = temp.path().join("dest");
    fs::create_dir(&dest_dir).unwrap();
    let payload: Vec<u8> = (0..=255u8).cycle().take(64 * 1024 + 7).collect();
    fs::write(temp.path().join("blob.bin"), &payload).unwrap();

    let src = handle(temp.path().join("blob.bin"));
    let copy = src.copy(&OsFileSystem, &dest_dir).unwrap();
    assert_eq!(copy.name(), "blob.bin");
    assert_eq!(copy.read_all(&OsFileSystem).unwrap(), payload);
    assert_eq!(src.read_all(&OsFileSystem).unwrap(), payload);
}

#[test]
fn copy_of_empty_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let dest_dir = temp.path().join("dest");
    fs::create_dir(&dest_dir).unwrap();
    fs::write(temp.path().join("empty.txt"), "").unwrap();

    let copy = handle(temp.path().join("empty.txt"))
        .copy(&OsFileSystem, &dest_dir)
        .unwrap();
    assert!(copy.read_all(&OsFileSystem).unwrap().is_empty());
}

#[test]
fn move_removes_source() {
    let temp = TempDir::new().unwrap();
    let dest_dir = temp.path().join("dest");
    fs::create_dir(&dest_dir).unwrap();
    fs::write(temp.path().join("report.pdf"), "pdf-bytes").unwrap();

    let src = handle(temp.path().join("report.pdf"));
    let moved = src.move_to(&OsFileSystem, &dest_dir).unwrap();
    assert!(src.stat(&OsFileSystem).unwrap_err().is_not_found());
    assert_eq!(moved.read_all(&OsFileSystem).unwrap(), b"pdf-bytes");
}

#[test]
fn move_and_rename() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("old.txt"), "body").unwrap();

    let src = handle(temp.path().join("old.txt"));
    let moved = src
        .move_and_rename(&OsFileSystem, temp.path(), "new.txt")
        .unwrap();
    assert_eq!(moved.name(), "new.txt");
    assert!(!temp.path().join("old.txt").exists());
    assert_eq!(fs::read_to_string(temp.path().join("new.txt")).unwrap(), "body");
}

#[test]
fn copy_into_missing_directory_fails_on_create() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();

    let err = handle(temp.path().join("a.txt"))
        .copy(&OsFileSystem, temp.path().join("nope"))
        .unwrap_err();
    assert!(matches!(err, FsError::Io { op: IoOp::Create, .. }));
    assert!(temp.path().join("a.txt").exists());
}

#[test]
fn write_truncates_previous_contents() {
    let temp = TempDir::new().unwrap();
    let file = handle(temp.path().join("state.json"));
    file.write_string(&OsFileSystem, "{\"long\": \"previous value\"}")
        .unwrap();
    file.write_bytes(&OsFileSystem, b"{}").unwrap();
    assert_eq!(file.read_all(&OsFileSystem).unwrap(), b"{}");
    assert_eq!(file.stat(&OsFileSystem).unwrap().len, 2);
}

#[test]
fn create_then_remove() {
    let temp = TempDir::new().unwrap();
    let file = handle(temp.path().join("tmp.lock"));
    drop(file.create(&OsFileSystem).unwrap());
    assert!(file.stat(&OsFileSystem).is_ok());
    file.remove(&OsFileSystem).unwrap();
    assert!(file.stat(&OsFileSystem).unwrap_err().is_not_found());
    assert!(matches!(
        file.remove(&OsFileSystem).unwrap_err(),
        FsError::Io { op: IoOp::Remove, .. }
    ));
}

#[cfg(unix)]
#[test]
fn copy_through_symlinked_directory_onto_source_is_rejected() {
    let temp = TempDir::new().unwrap();
    let real = temp.path().join("real");
    fs::create_dir(&real).unwrap();
    fs::write(real.join("a.txt"), "precious").unwrap();
    std::os::unix::fs::symlink(&real, temp.path().join("alias")).unwrap();

    let src = handle(real.join("a.txt"));
    let err = src.copy(&OsFileSystem, temp.path().join("alias")).unwrap_err();
    assert!(matches!(err, FsError::Io { op: IoOp::Copy, .. }));
    assert_eq!(fs::read_to_string(real.join("a.txt")).unwrap(), "precious");
}

#[cfg(unix)]
#[test]
fn copy_onto_hard_link_of_source_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "precious").unwrap();
    fs::create_dir(temp.path().join("other")).unwrap();
    fs::hard_link(temp.path().join("a.txt"), temp.path().join("other").join("a.txt")).unwrap();

    let src = handle(temp.path().join("a.txt"));
    assert!(src.copy(&OsFileSystem, temp.path().join("other")).is_err());
    assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "precious");
}
