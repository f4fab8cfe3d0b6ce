//! Tree population against the host filesystem

use fstree::{DirectoryNode, FileHandle, FsError, IoOp, OsFileSystem, TreeBuilder, WalkerConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn names(files: &[FileHandle]) -> Vec<String> {
    files.iter().map(FileHandle::name).collect()
}

#[test]
fn single_file_and_empty_subdirectory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("x.txt"), "x").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();

    let root = DirectoryNode::populate(&OsFileSystem, temp.path()).unwrap();
    assert_eq!(names(root.files()), vec!["x.txt"]);
    assert_eq!(root.subdirectories().len(), 1);

    let sub = &root.subdirectories()[0];
    assert_eq!(sub.path(), Path::new("sub"));
    assert!(sub.files().is_empty());
    assert!(sub.subdirectories().is_empty());
}

#[test]
fn children_are_sorted() {
    let temp = TempDir::new().unwrap();
    for name in ["zeta.md", "alpha.txt", "Beta.rs", "mid.txt"] {
        fs::write(temp.path().join(name), "").unwrap();
    }
    for dir in ["zz", "aa", "mm"] {
        fs::create_dir(temp.path().join(dir)).unwrap();
    }

    let root = DirectoryNode::populate(&OsFileSystem, temp.path()).unwrap();
    assert_eq!(
        names(root.files()),
        vec!["Beta.rs", "alpha.txt", "mid.txt", "zeta.md"]
    );
    let dirs: Vec<_> = root
        .subdirectories()
        .iter()
        .map(|d| d.path().to_path_buf())
        .collect();
    assert_eq!(dirs, vec![Path::new("aa"), Path::new("mm"), Path::new("zz")]);
}

#[test]
fn nested_files_resolve_against_their_own_directory() {
    let temp = TempDir::new().unwrap();
    let deep = temp.path().join("a").join("b");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("leaf.txt"), "leaf").unwrap();

    let root = DirectoryNode::populate(&OsFileSystem, temp.path()).unwrap();
    let b = root.subdirectory("a").unwrap().subdirectory("b").unwrap();
    let leaf = &b.files()[0];
    assert_eq!(leaf.read_all(&OsFileSystem).unwrap(), b"leaf");
    assert_eq!(
        fs::canonicalize(leaf.full_path()).unwrap(),
        fs::canonicalize(deep.join("leaf.txt")).unwrap()
    );
}

#[test]
fn filter_by_extension_on_real_directory() {
    let temp = TempDir::new().unwrap();
    for name in ["c.txt", "a.txt", "b.md"] {
        fs::write(temp.path().join(name), "").unwrap();
    }
    let root = DirectoryNode::populate(&OsFileSystem, temp.path()).unwrap();
    assert_eq!(names(&root.filter_by_extension("txt")), vec!["a.txt", "c.txt"]);
}

#[test]
fn create_file_registers_without_writing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "").unwrap();
    fs::write(temp.path().join("z.txt"), "").unwrap();

    let mut root = DirectoryNode::populate(&OsFileSystem, temp.path()).unwrap();
    let created = root.create_file(&OsFileSystem, "new.log").unwrap();
    assert_eq!(names(root.files()), vec!["a.txt", "new.log", "z.txt"]);
    assert!(!temp.path().join("new.log").exists());

    created.write_string(&OsFileSystem, "line\n").unwrap();
    assert_eq!(fs::read_to_string(temp.path().join("new.log")).unwrap(), "line\n");
}

#[test]
fn missing_root_aborts_with_walk_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");
    let err = DirectoryNode::populate(&OsFileSystem, &missing).unwrap_err();
    assert!(matches!(err, FsError::Walk { .. }));
    assert!(matches!(err.root_cause(), FsError::Io { op: IoOp::List, .. }));
}

#[test]
fn walker_config_limits_depth() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("one").join("two")).unwrap();
    fs::write(temp.path().join("one").join("two").join("deep.txt"), "").unwrap();

    let root = TreeBuilder::new(temp.path())
        .with_walker_config(WalkerConfig {
            max_depth: Some(1),
            ..WalkerConfig::default()
        })
        .build(&OsFileSystem)
        .unwrap();
    let two = root.subdirectory("one").unwrap().subdirectory("two").unwrap();
    assert!(two.files().is_empty());
}

#[cfg(unix)]
#[test]
fn symlink_cycles_are_not_followed() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("loop")).unwrap();
    std::os::unix::fs::symlink(temp.path(), temp.path().join("loop").join("back")).unwrap();

    let root = DirectoryNode::populate(&OsFileSystem, temp.path()).unwrap();
    let inner = root.subdirectory("loop").unwrap();
    assert!(inner.subdirectories().is_empty());
    assert_eq!(names(inner.files()), vec!["back"]);
}
