//! Working-tree status classification
//!
//! Terminology:
//! - staged files: present in the staging index
//! - modified files: tracked by the latest commit, not re-staged, and with
//!   on-disk content hashing to a different digest than the committed one
//! - untracked files: absent from both the staging index and the latest
//!   commit's file set

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::staging::staging_entry::StagingEntry;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The three status buckets, each sorted by path
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub staged: Vec<PathBuf>,
    pub modified: Vec<PathBuf>,
    pub untracked: Vec<PathBuf>,
}

impl StatusReport {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty() && self.untracked.is_empty()
    }

    /// Classify every working-tree file against the index and latest commit
    ///
    /// `workspace_files` maps each on-disk path (ignore-filtered, relative to
    /// the working-tree root) to the digest of its current content.
    pub fn classify(
        workspace_files: &BTreeMap<PathBuf, ObjectId>,
        index_entries: &[StagingEntry],
        head_files: &[StagingEntry],
    ) -> Self {
        let mut report = StatusReport::default();

        for (path, disk_oid) in workspace_files {
            let staged = index_entries.iter().any(|entry| &entry.path == path);
            let committed = head_files.iter().find(|entry| &entry.path == path);

            if staged {
                report.staged.push(path.clone());
            } else if let Some(committed) = committed {
                if &committed.oid != disk_oid {
                    report.modified.push(path.clone());
                }
            } else {
                report.untracked.push(path.clone());
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::StatusReport;
    use crate::artifacts::objects::object_id::ObjectId;
    use crate::artifacts::staging::staging_entry::StagingEntry;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn oid(digest: &str) -> ObjectId {
        ObjectId::try_parse(digest.repeat(40)).unwrap()
    }

    fn entry(path: &str, digest: &str) -> StagingEntry {
        StagingEntry::new(PathBuf::from(path), oid(digest))
    }

    #[test]
    fn edited_committed_file_is_modified_not_untracked() {
        let workspace = BTreeMap::from([(PathBuf::from("x"), oid("2"))]);
        let head = vec![entry("x", "1")];

        let report = StatusReport::classify(&workspace, &[], &head);

        assert_eq!(report.modified, vec![PathBuf::from("x")]);
        assert!(report.untracked.is_empty());
        assert!(report.staged.is_empty());
    }

    #[test]
    fn committed_file_with_unchanged_content_is_clean() {
        let workspace = BTreeMap::from([(PathBuf::from("x"), oid("1"))]);
        let head = vec![entry("x", "1")];

        assert!(StatusReport::classify(&workspace, &[], &head).is_clean());
    }

    #[test]
    fn staged_wins_over_modified() {
        let workspace = BTreeMap::from([(PathBuf::from("x"), oid("2"))]);
        let index = vec![entry("x", "2")];
        let head = vec![entry("x", "1")];

        let report = StatusReport::classify(&workspace, &index, &head);

        assert_eq!(report.staged, vec![PathBuf::from("x")]);
        assert!(report.modified.is_empty());
    }

    #[test]
    fn unknown_file_is_untracked() {
        let workspace = BTreeMap::from([(PathBuf::from("new.txt"), oid("3"))]);

        let report = StatusReport::classify(&workspace, &[], &[]);

        assert_eq!(report.untracked, vec![PathBuf::from("new.txt")]);
    }
}
