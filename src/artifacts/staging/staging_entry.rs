//! One staged path→digest binding
//!
//! ## Format
//!
//! Serialized as a single text line `<digest> <path>`, both in the index
//! file and inside commit records. Paths may contain spaces; the digest is
//! fixed-width, so the split point is unambiguous.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::PathBuf;

/// A staged file: working-tree path plus the digest of its staged content
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct StagingEntry {
    pub path: PathBuf,
    pub oid: ObjectId,
}

impl StagingEntry {
    /// Parse an entry from its `<digest> <path>` line form
    pub fn try_parse(line: &str) -> anyhow::Result<Self> {
        let (oid, path) = line
            .split_once(' ')
            .ok_or_else(|| anyhow::anyhow!("Invalid staging entry: {}", line))?;

        Ok(StagingEntry {
            path: PathBuf::from(path),
            oid: ObjectId::try_parse(oid.to_string())?,
        })
    }
}

impl std::fmt::Display for StagingEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.oid, self.path.display())
    }
}
