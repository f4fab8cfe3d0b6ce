//! Property tests over the in-memory filesystem

use fstree::{decompose, DirectoryNode, FileHandle, MemoryFileSystem};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

fn check_sorted(node: &DirectoryNode) -> bool {
    let dirs: Vec<_> = node
        .subdirectories()
        .iter()
        .map(|d| d.path().as_os_str().to_os_string())
        .collect();
    let files: Vec<_> = node.files().iter().map(FileHandle::name).collect();
    is_sorted(&dirs) && is_sorted(&files) && node.subdirectories().iter().all(check_sorted)
}

fn relative_paths() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(
        prop::collection::vec("[a-zA-Z0-9]{1,6}(\\.[a-z]{1,3})?", 1..4).prop_map(|s| s.join("/")),
        0..24,
    )
}

proptest! {
    #[test]
    fn populated_nodes_are_sorted(paths in relative_paths()) {
        let fs = MemoryFileSystem::new();
        fs.create_dir_all("/root");
        for path in &paths {
            // A name used as a file elsewhere cannot also be a directory.
            let full = format!("/root/{path}");
            let blocked = std::path::Path::new(&full)
                .ancestors()
                .skip(1)
                .any(|a| fs.contents(a).is_some());
            if !blocked && !fs.exists(&full) {
                fs.write(&full, path.as_bytes());
            }
        }
        let root = DirectoryNode::populate(&fs, "/root").unwrap();
        prop_assert!(check_sorted(&root));
    }

    #[test]
    fn create_file_keeps_files_sorted(
        existing in prop::collection::btree_set("[a-z]{1,8}\\.txt", 0..10),
        added in prop::collection::vec("[a-z]{1,8}\\.log", 1..5),
    ) {
        let fs = MemoryFileSystem::new();
        fs.create_dir_all("/d");
        for name in &existing {
            fs.write(format!("/d/{name}"), "");
        }
        let mut node = DirectoryNode::populate(&fs, "/d").unwrap();
        for name in &added {
            node.create_file(&fs, name).unwrap();
        }
        let names: Vec<_> = node.files().iter().map(FileHandle::name).collect();
        prop_assert!(is_sorted(&names));
        prop_assert_eq!(names.len(), existing.len() + added.len());
    }

    #[test]
    fn copy_round_trips_contents(body in prop::collection::vec(any::<u8>(), 0..2048)) {
        let fs = MemoryFileSystem::new();
        fs.write("/src/file.bin", &body);
        fs.create_dir_all("/dst");
        let src = FileHandle::new(&fs, "/src/file.bin").unwrap();
        let copy = src.copy(&fs, "/dst").unwrap();
        prop_assert_eq!(copy.read_all(&fs).unwrap(), body);
    }

    #[test]
    fn decompose_matches_handle(name in "[a-z]{1,6}(\\.[a-z]{1,4}){0,2}") {
        let fs = MemoryFileSystem::new().with_current_dir("/cwd");
        let parts = decompose(&fs, &name).unwrap();
        let file = FileHandle::new(&fs, &name).unwrap();
        prop_assert_eq!(parts.dir.as_path(), file.dir());
        prop_assert_eq!(file.name(), name);
    }
}
