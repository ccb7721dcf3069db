use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::errors::Error;
use std::io::Write;

impl Repository {
    /// Mirror a branch's latest digest under the simulated remote
    ///
    /// The "remote" is `refs/remotes/<remote>/<branch>` inside the same
    /// repository directory; no objects move because the store is shared.
    pub fn push(&mut self, remote: Option<&str>, branch: Option<&str>) -> anyhow::Result<()> {
        let remote = remote.unwrap_or("origin");
        let branch = match branch {
            Some(branch) => branch.to_string(),
            None => match self.refs().current_head_ref()? {
                Head::Branch(name) => name,
                Head::Detached(_) => {
                    return Err(Error::InvalidOperation(
                        "cannot push in detached HEAD state".into(),
                    )
                    .into());
                }
            },
        };

        let oid = self
            .refs()
            .read_branch(&branch)?
            .ok_or_else(|| Error::NotFound(format!("commits on branch {}", branch)))?;

        self.refs().update_remote_ref(remote, &branch, &oid)?;

        writeln!(
            self.writer(),
            "Pushed {} to {} ({})",
            branch,
            remote,
            oid.to_short_oid()
        )?;

        Ok(())
    }
}
