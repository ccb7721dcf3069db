use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::merge::{detect_conflicts, merged_files};
use crate::errors::Error;
use std::io::Write;

impl Repository {
    /// Additive merge of another branch's latest file set into this one
    ///
    /// Conflicts (same path, differing digests on both sides) abort the
    /// merge with no state change. On success the merged set is staged and
    /// materialized but not committed; a separate `commit` finalizes it with
    /// a single parent, the pre-merge HEAD.
    pub fn merge(&mut self, branch: &str) -> anyhow::Result<()> {
        let current = match self.refs().current_head_ref()? {
            Head::Branch(name) => name,
            Head::Detached(_) => {
                return Err(
                    Error::InvalidOperation("cannot merge in detached HEAD state".into()).into(),
                );
            }
        };

        if current == branch {
            return Err(Error::InvalidOperation(format!(
                "cannot merge branch {} into itself",
                branch
            ))
            .into());
        }

        let incoming_oid = self
            .refs()
            .read_branch(branch)?
            .ok_or_else(|| Error::NotFound(format!("commits on branch {}", branch)))?;
        let incoming = self
            .database()
            .parse_object_as_commit(&incoming_oid)?
            .ok_or_else(|| Error::NotFound(format!("commit {}", incoming_oid)))?;

        let base_files = match self.refs().read_head()? {
            Some(head_oid) => self
                .database()
                .parse_object_as_commit(&head_oid)?
                .ok_or_else(|| Error::NotFound(format!("commit {}", head_oid)))?
                .files()
                .to_vec(),
            None => Vec::new(),
        };

        let conflicts = detect_conflicts(&base_files, incoming.files());
        if !conflicts.is_empty() {
            return Err(Error::ConflictDetected(
                conflicts
                    .into_iter()
                    .map(|path| path.display().to_string())
                    .collect(),
            )
            .into());
        }

        let merged = merged_files(&base_files, incoming.files());

        let mut index = self.index();
        index.rehydrate()?;
        index.clear();
        for entry in &merged {
            index.add(entry.clone());
        }
        index.write_updates()?;
        drop(index);

        for entry in &merged {
            let blob = self
                .database()
                .parse_object_as_blob(&entry.oid)?
                .ok_or_else(|| Error::NotFound(format!("blob {}", entry.oid)))?;
            self.workspace().write_file(&entry.path, blob.content())?;
        }

        writeln!(
            self.writer(),
            "Merged branch '{}' into {}: staged {} file(s), run `dit commit` to finalize",
            branch,
            current,
            merged.len()
        )?;

        Ok(())
    }
}
