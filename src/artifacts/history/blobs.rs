use crate::areas::repository::Repository;
use crate::artifacts::history::entry::HistoryEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// The distinct file contents a history touched, in history order
    ///
    /// Each entry's path is resolved in its commit's tree; entries that do
    /// not resolve to a blob are skipped, and consecutive resolutions to the
    /// same object ID collapse into one emission. A rename-only commit
    /// therefore adds nothing, while a content change following a rename
    /// does. Stateless: calling this twice recomputes from scratch.
    pub fn relevant_blobs(&self, history: &[HistoryEntry]) -> anyhow::Result<Vec<Blob>> {
        let database = self.database();
        let mut blobs = Vec::new();
        let mut last_emitted: Option<ObjectId> = None;

        for entry in history {
            let Some(found) = database.entry_at(entry.commit().tree_oid(), entry.path())? else {
                continue;
            };
            if last_emitted.as_ref() == Some(&found.oid) {
                continue;
            }
            let Some(blob) = database.parse_object_as_blob(&found.oid)? else {
                continue;
            };

            blobs.push(blob);
            last_emitted = Some(found.oid);
        }

        Ok(blobs)
    }
}
