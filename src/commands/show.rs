use crate::areas::repository::Repository;
use crate::artifacts::diff::{DiffTag, diff_lines};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::staging::staging_entry::StagingEntry;
use crate::errors::Error;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Display one commit, diffing each file against the parent commit
    ///
    /// Accepts a full digest or an unambiguous prefix. A path absent from
    /// the parent is reported as newly added; the initial commit reports
    /// every file as newly added.
    pub fn show(&mut self, revision: &str) -> anyhow::Result<()> {
        let oid = self.resolve_object_id(revision)?;
        let commit = self
            .database()
            .parse_object_as_commit(&oid)?
            .ok_or_else(|| Error::NotFound(format!("commit {}", revision)))?;

        let parent = match commit.parent() {
            Some(parent_oid) => self.database().parse_object_as_commit(parent_oid)?,
            None => None,
        };

        let decorations = self.branch_tips()?;
        self.show_commit_medium(&oid, &commit, &decorations)?;

        for entry in commit.files() {
            match parent.as_ref().and_then(|p| p.file_oid(&entry.path)) {
                None => self.show_new_file(entry)?,
                Some(parent_oid) if parent_oid == &entry.oid => {}
                Some(parent_oid) => self.show_modified_file(entry, parent_oid)?,
            }
        }

        Ok(())
    }

    /// Resolve a full digest or an unambiguous prefix against the store
    fn resolve_object_id(&self, revision: &str) -> anyhow::Result<ObjectId> {
        if revision.len() == OBJECT_ID_LENGTH {
            return ObjectId::try_parse(revision.to_string());
        }

        let candidates = self.database().find_objects_by_prefix(revision)?;
        match candidates.as_slice() {
            [] => Err(Error::NotFound(format!("object {}", revision)).into()),
            [oid] => Ok(oid.clone()),
            _ => Err(Error::InvalidOperation(format!(
                "ambiguous object prefix {} ({} candidates)",
                revision,
                candidates.len()
            ))
            .into()),
        }
    }

    fn show_new_file(&self, entry: &StagingEntry) -> anyhow::Result<()> {
        let blob = self.load_blob(&entry.oid)?;

        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "{}",
            format!("new file: {}", entry.path.display()).bold()
        )?;
        for line in blob.lines() {
            writeln!(self.writer(), "{}", format!("+{}", line).green())?;
        }

        Ok(())
    }

    fn show_modified_file(&self, entry: &StagingEntry, parent_oid: &ObjectId) -> anyhow::Result<()> {
        let old = self.load_blob(parent_oid)?;
        let new = self.load_blob(&entry.oid)?;

        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "{}",
            format!("modified: {}", entry.path.display()).bold()
        )?;
        for line in diff_lines(&old, &new) {
            let rendered = format!("{}{}", line.tag.marker(), line.text);
            let rendered = match line.tag {
                DiffTag::Added => rendered.green().to_string(),
                DiffTag::Removed => rendered.red().to_string(),
                DiffTag::Context => rendered,
            };
            writeln!(self.writer(), "{}", rendered)?;
        }

        Ok(())
    }

    // rendering is line-oriented; non-UTF-8 bytes degrade lossily here and
    // only here, the stored object keeps the raw bytes
    fn load_blob(&self, oid: &ObjectId) -> anyhow::Result<String> {
        let blob = self
            .database()
            .parse_object_as_blob(oid)?
            .ok_or_else(|| Error::NotFound(format!("blob {}", oid)))?;

        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }
}
