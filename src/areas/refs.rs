//! References (branches, HEAD, remote mirrors)
//!
//! References are human-readable names pointing to commits:
//!
//! - HEAD: either symbolic (`ref: refs/heads/<branch>`) or a raw digest
//!   (detached state)
//! - Branches: `refs/heads/<branch>` containing a commit digest, or empty
//!   for a branch with no commits yet
//! - Remote mirrors: `refs/remotes/<remote>/<branch>`, written by push and
//!   read by pull
//!
//! Every ref file is read and rewritten as a whole; there is no locking,
//! and two racing processes are last-writer-wins by design.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic HEAD contents
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Where HEAD currently points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// Symbolic reference to a branch
    Branch(String),
    /// Raw digest (detached state)
    Detached(ObjectId),
}

impl Head {
    /// The branch name, or the detached-state sentinel
    pub fn display_name(&self) -> String {
        match self {
            Head::Branch(name) => name.clone(),
            Head::Detached(oid) => format!("(detached at {})", oid.to_short_oid()),
        }
    }
}

/// Reference manager rooted at the repository directory (`.dit`)
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    /// Read HEAD and classify it as symbolic or detached
    ///
    /// Fails when the HEAD file is missing, i.e. the directory holds no
    /// repository.
    pub fn current_head_ref(&self) -> anyhow::Result<Head> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Err(Error::NotFound("repository (run `dit init` first)".into()).into());
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        match symref_match {
            Some(symref_match) => Ok(Head::Branch(symref_match[1].to_string())),
            None => Ok(Head::Detached(ObjectId::try_parse(content.to_string())?)),
        }
    }

    /// Dereference HEAD down to a commit digest
    ///
    /// `None` when the current branch has no commits yet.
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.current_head_ref()? {
            Head::Branch(name) => self.read_branch(&name),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    /// Read the digest a branch ref points at
    ///
    /// `None` for an existing branch with empty history; NotFound when no
    /// such ref exists.
    pub fn read_branch(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.heads_path().join(name);
        if !branch_path.exists() {
            return Err(Error::NotFound(format!("branch {}", name)).into());
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string())?))
        }
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.heads_path().join(name).exists()
    }

    /// Create a branch pointing at the current HEAD digest
    ///
    /// A null HEAD produces an empty-history branch (empty ref file).
    pub fn create_branch(&self, name: &str) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            return Err(Error::AlreadyExists(format!("branch {}", name)).into());
        }

        let raw_ref = match self.read_head()? {
            Some(oid) => oid.as_ref().to_string(),
            None => String::new(),
        };

        self.update_ref_file(self.heads_path().join(name).into_boxed_path(), raw_ref)
    }

    /// Delete a branch ref
    ///
    /// Deleting the currently checked-out branch is forbidden.
    pub fn delete_branch(&self, name: &str) -> anyhow::Result<()> {
        if let Head::Branch(current) = self.current_head_ref()?
            && current == name
        {
            return Err(
                Error::InvalidOperation(format!("cannot delete current branch {}", name)).into(),
            );
        }

        let branch_path = self.heads_path().join(name);
        if !branch_path.exists() {
            return Err(Error::NotFound(format!("branch {}", name)).into());
        }

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;

        Ok(())
    }

    /// List all branch names, relative to the heads directory
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(heads_path.as_ref())
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(heads_path.as_ref()).ok()?;
                Some(relative_path.to_string_lossy().to_string())
            })
            .collect::<Vec<_>>();

        branches.sort();
        Ok(branches)
    }

    /// Point HEAD symbolically at an existing branch
    pub fn set_head_to_branch(&self, name: &str) -> anyhow::Result<()> {
        if !self.branch_exists(name) {
            return Err(Error::NotFound(format!("branch {}", name)).into());
        }

        self.update_ref_file(self.head_path(), format!("ref: refs/heads/{}", name))
    }

    /// Advance a branch ref to a new commit digest
    pub fn update_branch(&self, name: &str, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(
            self.heads_path().join(name).into_boxed_path(),
            oid.as_ref().to_string(),
        )
    }

    /// Read the mirrored digest for a remote branch
    pub fn read_remote_ref(&self, remote: &str, branch: &str) -> anyhow::Result<ObjectId> {
        let ref_path = self.remotes_path().join(remote).join(branch);
        if !ref_path.exists() {
            return Err(Error::NotFound(format!("remote branch {}/{}", remote, branch)).into());
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("failed to read remote ref at {:?}", ref_path))?;

        ObjectId::try_parse(content.trim().to_string())
    }

    /// Mirror a branch digest under `refs/remotes/<remote>/<branch>`
    pub fn update_remote_ref(
        &self,
        remote: &str,
        branch: &str,
        oid: &ObjectId,
    ) -> anyhow::Result<()> {
        self.update_ref_file(
            self.remotes_path().join(remote).join(branch).into_boxed_path(),
            oid.as_ref().to_string(),
        )
    }

    pub fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        std::fs::write(&path, raw_ref)
            .with_context(|| format!("failed to write ref file at {:?}", path))
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    pub fn remotes_path(&self) -> Box<Path> {
        self.refs_path().join("remotes").into_boxed_path()
    }
}
