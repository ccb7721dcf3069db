//! Engine operations
//!
//! One `impl Repository` block per user-facing operation. Each operation
//! reads persisted state at entry, applies its state transition as a whole,
//! and writes it back before returning; on failure it leaves everything
//! untouched and reports one of the kinds in [`crate::errors::Error`].
//!
//! ## Operations
//!
//! - `init`: create the repository skeleton
//! - `add`: hash files into the store and stage them
//! - `commit`: turn the staged set into a new commit record
//! - `log` / `graph`: walk the commit chain back to the root
//! - `show`: display one commit with per-file diffs against its parent
//! - `status`: classify working-tree files as staged/modified/untracked
//! - `branch`: create, delete, or list branches
//! - `checkout`: switch branches and materialize the target commit
//! - `merge`: additive merge of another branch's latest file set
//! - `push` / `pull`: mirror branch digests through a simulated remote

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod graph;
pub mod init;
pub mod log;
pub mod merge;
pub mod pull;
pub mod push;
pub mod show;
pub mod status;
