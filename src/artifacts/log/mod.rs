//! Commit-chain traversal
//!
//! History is a singly-parented backward chain, so traversal is a cursor
//! loop, not recursion. A visited set guards against externally corrupted
//! parent links: revisiting a digest is reported as an error instead of
//! looping forever.

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Lazy walk from a starting commit back to the root
pub struct RevWalk<'d> {
    database: &'d Database,
    cursor: Option<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl<'d> RevWalk<'d> {
    /// Start a walk at `head`; `None` yields an empty walk
    pub fn new(database: &'d Database, head: Option<ObjectId>) -> Self {
        RevWalk {
            database,
            cursor: head,
            visited: HashSet::new(),
        }
    }

    fn step(&mut self, oid: ObjectId) -> anyhow::Result<(ObjectId, Commit)> {
        if !self.visited.insert(oid.clone()) {
            anyhow::bail!(
                "corrupt history: commit {} is reachable from itself",
                oid.to_short_oid()
            );
        }

        let commit = self
            .database
            .parse_object_as_commit(&oid)?
            .ok_or_else(|| anyhow::anyhow!("object {} is not a commit", oid.to_short_oid()))?;

        self.cursor = commit.parent().cloned();

        Ok((oid, commit))
    }
}

impl Iterator for RevWalk<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.cursor.take()?;
        let result = self.step(oid);

        if result.is_err() {
            // fuse after the first failure
            self.cursor = None;
        }

        Some(result)
    }
}
