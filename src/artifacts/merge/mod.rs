//! Merge engine
//!
//! Conflict detection is path-level and additive: a path conflicts iff it is
//! present on both sides with differing digests. Paths unique to either side
//! never conflict. There is no common-ancestor computation; the merged set is
//! the current side's entries followed by the incoming entries whose paths
//! the current side does not already track.

use crate::artifacts::staging::staging_entry::StagingEntry;
use std::path::PathBuf;

/// Paths present in both file sets with differing digests
pub fn detect_conflicts(base: &[StagingEntry], incoming: &[StagingEntry]) -> Vec<PathBuf> {
    base.iter()
        .filter(|base_entry| {
            incoming
                .iter()
                .any(|entry| entry.path == base_entry.path && entry.oid != base_entry.oid)
        })
        .map(|entry| entry.path.clone())
        .collect()
}

/// The additive merge result: base entries, then incoming-only entries
///
/// Caller must have checked [`detect_conflicts`] first; on shared paths the
/// base side wins here.
pub fn merged_files(base: &[StagingEntry], incoming: &[StagingEntry]) -> Vec<StagingEntry> {
    let mut merged = base.to_vec();

    for entry in incoming {
        if !base.iter().any(|base_entry| base_entry.path == entry.path) {
            merged.push(entry.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::{detect_conflicts, merged_files};
    use crate::artifacts::objects::object_id::ObjectId;
    use crate::artifacts::staging::staging_entry::StagingEntry;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn entry(path: &str, digest: &str) -> StagingEntry {
        StagingEntry::new(
            PathBuf::from(path),
            ObjectId::try_parse(digest.repeat(40)).unwrap(),
        )
    }

    #[test]
    fn shared_path_with_differing_digests_conflicts() {
        let base = vec![entry("a", "1"), entry("b", "1")];
        let incoming = vec![entry("b", "2"), entry("c", "1")];

        assert_eq!(detect_conflicts(&base, &incoming), vec![PathBuf::from("b")]);
    }

    #[test]
    fn shared_path_with_identical_digests_does_not_conflict() {
        let base = vec![entry("a", "1")];
        let incoming = vec![entry("a", "1")];

        assert!(detect_conflicts(&base, &incoming).is_empty());
    }

    #[test]
    fn unique_paths_never_conflict() {
        let base = vec![entry("a", "1")];
        let incoming = vec![entry("b", "2")];

        assert!(detect_conflicts(&base, &incoming).is_empty());
    }

    #[test]
    fn disjoint_sets_merge_to_their_union() {
        let base = vec![entry("a", "1")];
        let incoming = vec![entry("b", "1")];

        assert_eq!(
            merged_files(&base, &incoming),
            vec![entry("a", "1"), entry("b", "1")]
        );
    }

    #[test]
    fn base_side_wins_on_shared_paths() {
        let base = vec![entry("a", "1")];
        let incoming = vec![entry("a", "1"), entry("b", "2")];

        assert_eq!(
            merged_files(&base, &incoming),
            vec![entry("a", "1"), entry("b", "2")]
        );
    }
}
