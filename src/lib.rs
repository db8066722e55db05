//! File history with rename following over a content-addressed commit graph.
//!
//! The crate answers one question: given a path and a starting point in
//! history, which commits meaningfully changed the file at that path? The
//! walk follows the path backward through renames, so a file's entries span
//! all the names it carried over its lifetime.
//!
//! Entry points live on [`Repository`]:
//!
//! - [`Repository::file_history`] — walk with the default filter (HEAD,
//!   commit-time ordering)
//! - [`Repository::file_history_with`] — walk under a caller-supplied
//!   [`TraversalFilter`]
//! - [`Repository::relevant_blobs`] — project a history onto the distinct
//!   file contents it touched
//!
//! The supporting layers — the loose-object database, HEAD resolution, the
//! filtered rev-list, and the rename-aware tree diff — are part of the crate
//! so that it is self-contained, but the history walk only ever reads from
//! them.

pub mod areas;
pub mod artifacts;

pub use areas::database::Database;
pub use areas::refs::Refs;
pub use areas::repository::Repository;
pub use artifacts::database::database_entry::DatabaseEntry;
pub use artifacts::diff::tree_diff::{DiffFilter, TreeChangeType, TreeDiff};
pub use artifacts::history::entry::HistoryEntry;
pub use artifacts::history::filter::{SortStrategy, TraversalFilter};
pub use artifacts::log::rev_list::RevList;
pub use artifacts::objects::blob::Blob;
pub use artifacts::objects::commit::{Author, Commit};
pub use artifacts::objects::entry_mode::{EntryMode, FileMode};
pub use artifacts::objects::object::Object;
pub use artifacts::objects::object_id::ObjectId;
pub use artifacts::objects::tree::Tree;
