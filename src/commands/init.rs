use crate::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create refs/heads directory")?;

        fs::create_dir_all(self.refs().remotes_path())
            .context("Failed to create refs/remotes directory")?;

        if !self.refs().head_path().exists() {
            self.refs()
                .update_ref_file(
                    self.refs().head_path(),
                    format!("ref: refs/heads/{}", DEFAULT_BRANCH),
                )
                .context("Failed to create initial HEAD reference")?;
        }

        // make sure the default branch ref exists, with empty history
        let default_branch_path = self.refs().heads_path().join(DEFAULT_BRANCH);
        if !default_branch_path.exists() {
            fs::write(&default_branch_path, b"").context("Failed to create default branch file")?;
        }

        let index = self.index();
        if !index.path().exists() {
            fs::write(index.path(), b"").context("Failed to create index file")?;
        }

        writeln!(
            self.writer(),
            "Initialized empty dit repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
