use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::errors::Error;
use std::io::Write;

impl Repository {
    /// Fast-forward a branch to the digest mirrored under the remote
    ///
    /// When the pulled branch is the one checked out, its latest commit is
    /// also materialized onto the working tree.
    pub fn pull(&mut self, remote: Option<&str>, branch: Option<&str>) -> anyhow::Result<()> {
        let remote = remote.unwrap_or("origin");
        let current = match self.refs().current_head_ref()? {
            Head::Branch(name) => Some(name),
            Head::Detached(_) => None,
        };
        let branch = match branch {
            Some(branch) => branch.to_string(),
            None => current.clone().ok_or_else(|| {
                Error::InvalidOperation("cannot pull in detached HEAD state".into())
            })?,
        };

        let oid = self.refs().read_remote_ref(remote, &branch)?;
        self.refs().update_branch(&branch, &oid)?;

        if current.as_deref() == Some(branch.as_str()) {
            let commit = self
                .database()
                .parse_object_as_commit(&oid)?
                .ok_or_else(|| Error::NotFound(format!("commit {}", oid)))?;
            self.restore(&commit)?;
        }

        writeln!(
            self.writer(),
            "Pulled {} from {}; {} is at {}",
            branch,
            remote,
            branch,
            oid.to_short_oid()
        )?;

        Ok(())
    }
}
