#![allow(dead_code)]

pub mod command;
pub mod file;

use std::path::Path;

/// Read a ref file under `.dit/` and return its trimmed content.
pub fn read_repo_file(dir: &Path, relative: &str) -> String {
    let path = dir.join(".dit").join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
        .trim()
        .to_string()
}

/// Count the object files stored under `.dit/objects/`.
pub fn count_objects(dir: &Path) -> usize {
    let objects = dir.join(".dit").join("objects");
    std::fs::read_dir(&objects)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", objects.display(), e))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .count()
}
