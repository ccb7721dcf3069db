use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::log::RevWalk;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::collections::HashMap;
use std::io::Write;

impl Repository {
    /// Walk the chain from HEAD back to the root, newest first
    pub fn log(&mut self) -> anyhow::Result<()> {
        let head = self.refs().read_head()?;
        let decorations = self.branch_tips()?;

        for step in RevWalk::new(self.database(), head) {
            let (oid, commit) = step?;
            self.show_commit_medium(&oid, &commit, &decorations)?;
            writeln!(self.writer())?;
        }

        Ok(())
    }

    /// Map each branch-tip digest to the ref names decorating it
    ///
    /// The currently checked-out branch is listed first, as `HEAD -> name`.
    pub(crate) fn branch_tips(&self) -> anyhow::Result<HashMap<ObjectId, Vec<String>>> {
        let current = match self.refs().current_head_ref()? {
            Head::Branch(name) => Some(name),
            Head::Detached(_) => None,
        };

        let mut tips: HashMap<ObjectId, Vec<String>> = HashMap::new();
        for branch in self.refs().list_branches()? {
            if let Some(oid) = self.refs().read_branch(&branch)? {
                let name = if current.as_deref() == Some(branch.as_str()) {
                    format!("HEAD -> {}", branch)
                } else {
                    branch
                };
                let names = tips.entry(oid).or_default();
                if name.starts_with("HEAD -> ") {
                    names.insert(0, name);
                } else {
                    names.push(name);
                }
            }
        }

        Ok(tips)
    }

    pub(crate) fn show_commit_medium(
        &self,
        oid: &ObjectId,
        commit: &Commit,
        decorations: &HashMap<ObjectId, Vec<String>>,
    ) -> anyhow::Result<()> {
        let decoration = match decorations.get(oid) {
            Some(names) => format!(" ({})", names.join(", ")).green().to_string(),
            None => String::new(),
        };

        writeln!(
            self.writer(),
            "{}{}",
            format!("commit {}", oid).yellow(),
            decoration
        )?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }
}
