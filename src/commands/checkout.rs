use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Error;
use std::io::Write;

impl Repository {
    /// Switch HEAD to a branch and materialize its latest commit
    ///
    /// Materialization is skipped for a branch with no commits. Files in the
    /// working tree that the target commit does not track are left alone.
    pub fn checkout(&mut self, branch: &str) -> anyhow::Result<()> {
        self.refs().set_head_to_branch(branch)?;

        if let Some(oid) = self.refs().read_branch(branch)? {
            let commit = self
                .database()
                .parse_object_as_commit(&oid)?
                .ok_or_else(|| Error::NotFound(format!("commit {}", oid)))?;

            self.restore(&commit)?;
        }

        writeln!(self.writer(), "Switched to branch '{}'", branch)?;

        Ok(())
    }

    /// Write every file of a commit onto the working tree
    ///
    /// Intermediate directories are created as needed; nothing is pruned.
    pub(crate) fn restore(&self, commit: &Commit) -> anyhow::Result<()> {
        for entry in commit.files() {
            let blob = self
                .database()
                .parse_object_as_blob(&entry.oid)?
                .ok_or_else(|| Error::NotFound(format!("blob {}", entry.oid)))?;

            self.workspace().write_file(&entry.path, blob.content())?;
        }

        Ok(())
    }
}
