//! Commit record object
//!
//! A commit is a snapshot of the staged file set plus metadata. Its identity
//! is the digest of its own serialized form, so a commit is stored like any
//! other blob of bytes. The `parent` field forms a singly-linked backward
//! chain terminating at the root commit.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! branch <name>
//! parent <digest>
//! timestamp <epoch-seconds> <timezone>
//! file <digest> <path>
//! ...
//!
//! <commit message>
//! ```
//!
//! The parent line is omitted for the root commit. File lines appear in
//! staging order, which makes the serialization a deterministic function of
//! the record's fields.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::staging::staging_entry::StagingEntry;
use anyhow::Context;
use bytes::Bytes;
use std::io::{BufRead, Write};
use std::path::Path;

/// Commit record: a snapshot of staged files plus metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// When the commit was created
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    /// Commit message
    message: String,
    /// The staged file set at commit time, in staging order
    files: Vec<StagingEntry>,
    /// Parent commit digest (None for the root commit)
    parent: Option<ObjectId>,
    /// Branch the commit was created on
    branch: String,
}

impl Commit {
    /// Create a new commit stamped with the current local time
    pub fn new(
        message: String,
        files: Vec<StagingEntry>,
        parent: Option<ObjectId>,
        branch: String,
    ) -> Self {
        Commit {
            timestamp: chrono::Local::now().fixed_offset(),
            message,
            files,
            parent,
            branch,
        }
    }

    /// Create a commit with an explicit timestamp
    pub fn new_with_timestamp(
        timestamp: chrono::DateTime<chrono::FixedOffset>,
        message: String,
        files: Vec<StagingEntry>,
        parent: Option<ObjectId>,
        branch: String,
    ) -> Self {
        Commit {
            timestamp,
            message,
            files,
            parent,
            branch,
        }
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &[StagingEntry] {
        &self.files
    }

    /// Look up the digest recorded for a path, if the commit tracks it
    pub fn file_oid(&self, path: &Path) -> Option<&ObjectId> {
        self.files
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| &entry.oid)
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    fn parse_timestamp(value: &str) -> anyhow::Result<chrono::DateTime<chrono::FixedOffset>> {
        // epoch seconds followed by a +HHMM/-HHMM offset
        chrono::DateTime::parse_from_str(value, "%s %z")
            .map_err(|_| anyhow::anyhow!("Invalid timestamp: {}", value))
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        object_content.push(format!("branch {}", self.branch));
        if let Some(parent) = &self.parent {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        object_content.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for entry in &self.files {
            object_content.push(format!("file {}", entry));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        let mut commit_bytes = Vec::new();
        let header = format!(
            "{} {}\0",
            self.object_type().as_str(),
            object_content.len()
        );
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(object_content.as_bytes())?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let branch_line = lines
            .next()
            .context("Invalid commit object: missing branch line")?;
        let branch = branch_line
            .strip_prefix("branch ")
            .context("Invalid commit object: invalid branch line")?
            .to_string();

        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing timestamp line")?;

        let parent = match next_line.strip_prefix("parent ") {
            Some(parent_oid) => {
                let parent = ObjectId::try_parse(parent_oid.to_string())?;
                next_line = lines
                    .next()
                    .context("Invalid commit object: missing timestamp line")?;
                Some(parent)
            }
            None => None,
        };

        let timestamp = next_line
            .strip_prefix("timestamp ")
            .context("Invalid commit object: invalid timestamp line")?;
        let timestamp = Self::parse_timestamp(timestamp)?;

        let mut files = Vec::new();
        for line in lines.by_ref() {
            match line.strip_prefix("file ") {
                Some(entry) => files.push(StagingEntry::try_parse(entry)?),
                // the blank separator line before the message
                None => break,
            }
        }

        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Self::new_with_timestamp(
            timestamp, message, files, parent, branch,
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![];

        lines.push(format!("branch {}", self.branch));
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        lines.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for entry in &self.files {
            lines.push(format!("file {}", entry));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::Commit;
    use crate::artifacts::objects::object::{Object, Packable, Unpackable};
    use crate::artifacts::objects::object_id::ObjectId;
    use crate::artifacts::objects::object_type::ObjectType;
    use crate::artifacts::staging::staging_entry::StagingEntry;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn sample_entry(path: &str, digest: &str) -> StagingEntry {
        StagingEntry::new(
            PathBuf::from(path),
            ObjectId::try_parse(digest.repeat(40)).unwrap(),
        )
    }

    fn sample_commit(parent: Option<ObjectId>) -> Commit {
        let timestamp =
            chrono::DateTime::parse_from_rfc3339("2024-05-01T10:30:00+02:00").unwrap();
        Commit::new_with_timestamp(
            timestamp,
            "add readme\n\nwith a body".to_string(),
            vec![sample_entry("README.md", "a"), sample_entry("src/main.rs", "b")],
            parent,
            "master".to_string(),
        )
    }

    #[test]
    fn round_trips_through_serialized_form() {
        let commit = sample_commit(Some(ObjectId::try_parse("c".repeat(40)).unwrap()));

        let bytes = commit.serialize().unwrap();
        let mut reader = Cursor::new(bytes);
        let object_type = ObjectType::parse_object_type(&mut reader).unwrap();
        let parsed = Commit::deserialize(reader).unwrap();

        assert_eq!(object_type, ObjectType::Commit);
        assert_eq!(parsed, commit);
    }

    #[test]
    fn root_commit_round_trips_without_parent_line() {
        let commit = sample_commit(None);

        let bytes = commit.serialize().unwrap();
        assert!(!String::from_utf8_lossy(&bytes).contains("parent "));

        let mut reader = Cursor::new(bytes);
        ObjectType::parse_object_type(&mut reader).unwrap();
        let parsed = Commit::deserialize(reader).unwrap();

        assert_eq!(parsed.parent(), None);
        assert_eq!(parsed, commit);
    }

    #[test]
    fn identical_records_collide_to_the_same_digest() {
        let a = sample_commit(None);
        let b = sample_commit(None);

        assert_eq!(a.object_id().unwrap(), b.object_id().unwrap());
    }

    #[test]
    fn file_lookup_finds_recorded_paths_only() {
        let commit = sample_commit(None);

        assert!(commit.file_oid(std::path::Path::new("README.md")).is_some());
        assert!(commit.file_oid(std::path::Path::new("missing.md")).is_none());
    }
}
