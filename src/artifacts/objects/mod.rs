//! Stored object types and operations
//!
//! Everything the engine persists is an object identified by the SHA-1 digest
//! of its serialized form. There are two kinds:
//!
//! - **Blob**: the raw contents of a tracked file version
//! - **Commit**: a snapshot record (timestamp, message, file list, parent,
//!   branch)
//!
//! All objects serialize to the framed format `<type> <size>\0<payload>`,
//! so a commit is itself just another stored blob of bytes.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 digest in hexadecimal form
pub const OBJECT_ID_LENGTH: usize = 40;
