//! Object model for the content-addressed store
//!
//! Everything the store holds is an object identified by the SHA-1 of its
//! serialized form. Three kinds exist:
//!
//! - **Blob**: file content (raw bytes)
//! - **Tree**: one directory level (names, modes, and object IDs)
//! - **Commit**: snapshot with metadata (author, message, parents, tree)
//!
//! All objects serialize to and from the loose format
//! `<type> <size>\0<content>`.

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
