//! Working tree
//!
//! File system operations on the directory a repository tracks: listing
//! files (ignore-aware, skipping the reserved `.dit` directory), reading
//! and hashing contents, and materializing blobs back onto disk.

use crate::artifacts::ignore::IgnoreList;
use crate::artifacts::objects::blob::Blob;
use crate::{IGNORE_FILE, REPO_DIR};
use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ignore patterns from the working-tree root
    pub fn ignore_list(&self) -> anyhow::Result<IgnoreList> {
        IgnoreList::load(&self.path.join(IGNORE_FILE))
    }

    /// List tracked-candidate files under a directory
    ///
    /// Paths are reported relative to the working-tree root. The reserved
    /// repository directory and ignore-matched paths are skipped.
    pub fn list_files(
        &self,
        root_file_path: Option<PathBuf>,
        ignore: &IgnoreList,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => std::fs::canonicalize(p)?,
            None => self.path.clone().into(),
        };

        if !root_file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root_file_path);
        }

        if root_file_path.is_dir() {
            let mut files = WalkDir::new(&root_file_path)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter_map(|entry| self.check_if_not_ignored_file_path(entry.path(), ignore))
                .collect::<Vec<_>>();
            files.sort();
            Ok(files)
        } else {
            let relative = root_file_path
                .strip_prefix(self.path.as_ref())
                .map(PathBuf::from)
                .map_err(|_| {
                    anyhow::anyhow!(
                        "Path is outside the working tree: {}",
                        root_file_path.display()
                    )
                })?;
            Ok(vec![relative])
        }
    }

    fn is_reserved(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                name.to_string_lossy() == REPO_DIR
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_file_path(
        &self,
        path: &Path,
        ignore: &IgnoreList,
    ) -> Option<PathBuf> {
        if !path.is_file() || Self::is_reserved(path) {
            return None;
        }

        let relative = path.strip_prefix(self.path.as_ref()).ok()?.to_path_buf();
        if ignore.matches(&relative) {
            None
        } else {
            Some(relative)
        }
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))
    }

    /// Hash a working-tree file's current content
    pub fn hash_file(&self, file_path: &Path) -> anyhow::Result<crate::artifacts::objects::object_id::ObjectId> {
        use crate::artifacts::objects::object::Object;

        let blob = Blob::new(self.read_file(file_path)?.into());
        blob.object_id()
    }

    /// Write a blob's content to a working-tree path
    ///
    /// Intermediate directories are created as needed. Files absent from the
    /// written set are never deleted here; checkout does not prune.
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create directories for {}", full_path.display())
            })?;
        }

        std::fs::write(&full_path, content)
            .with_context(|| format!("Unable to write file {}", full_path.display()))
    }
}
