use crate::areas::repository::Repository;
use crate::artifacts::log::RevWalk;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Render the commit chain as a tree
    ///
    /// Every commit has exactly one parent (merge results are committed as
    /// ordinary single-parent commits), so the tree degenerates to a single
    /// path from HEAD to the root.
    pub fn graph(&mut self) -> anyhow::Result<()> {
        let head = self.refs().read_head()?;
        let decorations = self.branch_tips()?;

        let mut first = true;
        for step in RevWalk::new(self.database(), head) {
            let (oid, commit) = step?;

            if !first {
                writeln!(self.writer(), "|")?;
            }
            first = false;

            let decoration = match decorations.get(&oid) {
                Some(names) => format!(" ({})", names.join(", ")).green().to_string(),
                None => String::new(),
            };

            writeln!(
                self.writer(),
                "* {}{} {}",
                oid.to_short_oid().yellow(),
                decoration,
                commit.short_message()
            )?;
        }

        Ok(())
    }
}
