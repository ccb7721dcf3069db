//! Data structures and algorithms
//!
//! This module contains the engine's core types and algorithms:
//!
//! - `diff`: line-by-line comparison used to render `show`
//! - `ignore`: shell-glob ignore patterns loaded from the working-tree root
//! - `log`: commit-chain traversal with cycle detection
//! - `merge`: path-level conflict detection and the additive merge set
//! - `objects`: stored object types (blob, commit record)
//! - `staging`: staging-index entries
//! - `status`: working-tree status classification

pub mod diff;
pub mod ignore;
pub mod log;
pub mod merge;
pub mod objects;
pub mod staging;
pub mod status;
