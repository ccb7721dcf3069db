//! A minimal version-control engine: content-addressable object store,
//! staging index, branch refs, a single-parent commit chain, additive merge,
//! and a local-directory remote simulation.
//!
//! The crate is organized the same way the repository on disk is:
//!
//! - `areas`: the surfaces a repository is made of (object database, staging
//!   index, refs, working tree, and the `Repository` handle that ties them
//!   together)
//! - `artifacts`: data structures and algorithms (objects, staging entries,
//!   ignore patterns, history traversal, merge, status, line diffs)
//! - `commands`: one `impl Repository` block per user-facing operation
//! - `errors`: the typed failure kinds every operation is allowed to report

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the reserved repository directory at the working-tree root.
pub const REPO_DIR: &str = ".dit";

/// Name of the ignore-patterns file at the working-tree root.
pub const IGNORE_FILE: &str = ".ditignore";

/// Branch created by `init` and pointed at by the initial HEAD.
pub const DEFAULT_BRANCH: &str = "master";
