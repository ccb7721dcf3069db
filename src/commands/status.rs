use crate::areas::repository::Repository;
use crate::artifacts::status::StatusReport;
use colored::Colorize;
use std::collections::BTreeMap;
use std::io::Write;

impl Repository {
    /// Classify every working-tree file as staged, modified, or untracked
    ///
    /// Files matching the ignore patterns and everything inside the reserved
    /// repository directory are never reported.
    pub fn status(&mut self) -> anyhow::Result<()> {
        let head_ref = self.refs().current_head_ref()?;

        let mut index = self.index();
        index.rehydrate()?;

        let head_files = match self.refs().read_head()? {
            Some(oid) => self
                .database()
                .parse_object_as_commit(&oid)?
                .map(|commit| commit.files().to_vec())
                .unwrap_or_default(),
            None => Vec::new(),
        };

        let ignore = self.workspace().ignore_list()?;
        let mut workspace_files = BTreeMap::new();
        for path in self.workspace().list_files(None, &ignore)? {
            let oid = self.workspace().hash_file(&path)?;
            workspace_files.insert(path, oid);
        }

        let report = StatusReport::classify(&workspace_files, index.entries(), &head_files);
        drop(index);

        writeln!(self.writer(), "On branch {}", head_ref.display_name())?;

        if report.is_clean() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
            return Ok(());
        }

        for path in &report.staged {
            writeln!(
                self.writer(),
                "{}",
                format!("A  {}", path.display()).green()
            )?;
        }
        for path in &report.modified {
            writeln!(self.writer(), "{}", format!(" M {}", path.display()).red())?;
        }
        for path in &report.untracked {
            writeln!(self.writer(), "{}", format!("?? {}", path.display()).red())?;
        }

        Ok(())
    }
}
