use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::{Path, PathBuf};

/// One unit of a file's history
///
/// Pairs the path as it existed at that point in history with the commit
/// that created, changed, or renamed-into it. Entries are produced only by
/// the history walk and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, new)]
pub struct HistoryEntry {
    path: PathBuf,
    oid: ObjectId,
    commit: Commit,
}

impl HistoryEntry {
    /// The path the file lived at when this commit touched it
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn commit(&self) -> &Commit {
        &self.commit
    }
}
