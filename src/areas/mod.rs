//! Core repository surfaces
//!
//! This module contains the on-disk surfaces a repository is made of:
//!
//! - `database`: content-addressable object store (blobs and commit records)
//! - `index`: staging area tracking the next commit's file set
//! - `refs`: reference management (branches, HEAD, remote mirrors)
//! - `repository`: high-level handle tying the surfaces together
//! - `workspace`: working-directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
