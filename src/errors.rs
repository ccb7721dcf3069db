//! Operation-level error kinds.
//!
//! Every engine operation either fully applies its state transition or fails
//! with one of these kinds, leaving persisted state untouched. The CLI
//! boundary surfaces the message and exits non-zero; nothing is retried.

/// Failure kinds an engine operation may report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced object, commit, branch, or remote branch does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A branch or ref with this name already exists.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// Commit was requested with an empty staging index.
    #[error("nothing to commit (staging index is empty)")]
    NothingToCommit,

    /// The operation is structurally forbidden (deleting the checked-out
    /// branch, merging a branch into itself, committing in detached HEAD).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Merge aborted; carries every path staged on both sides with
    /// differing digests.
    #[error("merge aborted, conflicting paths: {}", .0.join(", "))]
    ConflictDetected(Vec<String>),
}
