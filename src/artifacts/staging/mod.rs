//! Staging entries
//!
//! A staging entry binds one working-tree path to the digest of the content
//! staged for it. Paths are flat keys: directories are never first-class,
//! however deeply a file is nested.

pub mod staging_entry;
