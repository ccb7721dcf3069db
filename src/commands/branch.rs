use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Create or delete a branch, or list all branches when no name is given
    pub fn branch(&mut self, name: Option<&str>, delete: bool) -> anyhow::Result<()> {
        match name {
            Some(name) if delete => {
                self.refs().delete_branch(name)?;
                writeln!(self.writer(), "Deleted branch {}", name)?;
            }
            Some(name) => {
                self.refs().create_branch(name)?;
                writeln!(self.writer(), "Created branch {}", name)?;
            }
            None => self.list_branches()?,
        }

        Ok(())
    }

    fn list_branches(&self) -> anyhow::Result<()> {
        let current = match self.refs().current_head_ref()? {
            Head::Branch(name) => Some(name),
            Head::Detached(_) => None,
        };

        for branch in self.refs().list_branches()? {
            if current.as_deref() == Some(branch.as_str()) {
                writeln!(self.writer(), "{}", format!("* {}", branch).green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(())
    }
}
