//! Staging index
//!
//! The index is the staging area tracking which file versions go into the
//! next commit. It is an ordered path→digest mapping: at most one entry per
//! path, staging order preserved, upserts overwrite in place. The whole
//! index is read at operation entry and written back at exit.
//!
//! ## File format
//!
//! One `<digest> <path>` line per entry, in staging order.

use crate::artifacts::staging::staging_entry::StagingEntry;
use anyhow::Context;
use std::path::Path;

/// Staging index (ordered path→digest mapping)
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.dit/index`)
    path: Box<Path>,
    /// Staged entries in staging order
    entries: Vec<StagingEntry>,
}

impl Index {
    /// Create a new empty index
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
        }
    }

    /// Get the path to the index file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing or empty index file yields an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        for line in content.lines().filter(|line| !line.is_empty()) {
            self.entries.push(StagingEntry::try_parse(line)?);
        }

        Ok(())
    }

    /// Upsert an entry
    ///
    /// A path staged for the first time is appended; re-staging an existing
    /// path overwrites its digest in place, keeping the original position.
    pub fn add(&mut self, entry: StagingEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.path == entry.path)
        {
            Some(existing) => existing.oid = entry.oid,
            None => self.entries.push(entry),
        }
    }

    /// Empty the index; invoked only after a successful commit or before
    /// staging a merge result
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The current staged set, in staging order
    ///
    /// Used verbatim as a commit's file list.
    pub fn snapshot(&self) -> Vec<StagingEntry> {
        self.entries.clone()
    }

    pub fn entries(&self) -> &[StagingEntry] {
        &self.entries
    }

    /// Persist the index, replacing the file as a whole
    pub fn write_updates(&self) -> anyhow::Result<()> {
        let mut content = self
            .entries
            .iter()
            .map(|entry| entry.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        if !content.is_empty() {
            content.push('\n');
        }

        std::fs::write(&self.path, content)
            .with_context(|| format!("Unable to write index file {}", self.path.display()))
    }
}
