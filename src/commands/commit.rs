use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Error;
use std::io::Write;

impl Repository {
    /// Turn the staged set into a new commit on the current branch
    ///
    /// The sole state transition that grows the commit chain: stores the
    /// record, advances the branch ref, and clears the staging index.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let branch = match self.refs().current_head_ref()? {
            Head::Branch(name) => name,
            Head::Detached(_) => {
                return Err(
                    Error::InvalidOperation("cannot commit in detached HEAD state".into()).into(),
                );
            }
        };

        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            return Err(Error::NothingToCommit.into());
        }

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit = Commit::new(
            message.trim().to_string(),
            index.snapshot(),
            parent,
            branch.clone(),
        );

        let commit_id = self.database().store(&commit)?;
        self.refs().update_branch(&branch, &commit_id)?;

        index.clear();
        index.write_updates()?;

        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            branch,
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
