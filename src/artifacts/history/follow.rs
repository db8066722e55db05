//! Commit-range extraction and the rename-follow walk
//!
//! `FileHistory` chains runs of relevant commits across rename boundaries.
//! A run is the maximal newest-first stretch over which one path name stays
//! present and keeps changing; a rename detected across the oldest run
//! commit's single-parent edge re-enters the walk at the parent under the
//! old name. The runs concatenate into one flattened sequence.
//!
//! ## Debug Logging
//!
//! Build with `--features debug_follow` to trace run lengths and rename
//! boundaries on stderr.

use crate::areas::repository::Repository;
use crate::artifacts::diff::tree_diff::DiffFilter;
use crate::artifacts::history::entry::HistoryEntry;
use crate::artifacts::history::filter::TraversalFilter;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Macro for debug logging that is enabled with the debug_follow feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "debug_follow"))]
        {
            eprintln!($($arg)*);
        }
    };
}

#[derive(new)]
pub struct FileHistory<'r> {
    repository: &'r Repository,
}

impl<'r> FileHistory<'r> {
    /// Build the flattened history of the file at `path`
    ///
    /// The filter is normalized first, so an unsupported sort strategy runs
    /// under the default ordering instead of failing. The walk holds no
    /// state beyond this call; an empty result is a valid outcome for a
    /// path that never existed.
    pub fn full_history(
        &self,
        filter: &TraversalFilter,
        path: &Path,
    ) -> anyhow::Result<Vec<HistoryEntry>> {
        anyhow::ensure!(
            !path.as_os_str().is_empty(),
            "history path must not be empty"
        );

        let mut entries = Vec::new();
        self.walk(filter.normalized(), path.to_path_buf(), &mut entries)?;
        Ok(entries)
    }

    fn walk(
        &self,
        filter: TraversalFilter,
        path: PathBuf,
        entries: &mut Vec<HistoryEntry>,
    ) -> anyhow::Result<()> {
        let run = self.relevant_commits(&filter, &path)?;
        debug_log!("run of {} commits for {}", run.len(), path.display());

        let Some((_, oldest_commit)) = run.last().cloned() else {
            return Ok(());
        };

        entries.extend(
            run.into_iter()
                .map(|(oid, commit)| HistoryEntry::new(path.clone(), oid, commit)),
        );

        // a rename can only be attributed across a single-parent edge;
        // roots have nothing to compare against and merges are not followed
        let [parent_oid] = oldest_commit.parents() else {
            return Ok(());
        };

        // the bound must strictly regress toward the root
        anyhow::ensure!(
            filter.since.as_ref() != Some(parent_oid),
            "rename follow made no progress at {parent_oid}"
        );

        let database = self.repository.database();
        let parent = database
            .parse_object_as_commit(parent_oid)?
            .with_context(|| format!("Commit object not found: {parent_oid}"))?;
        let diff = database.tree_diff(Some(parent.tree_oid()), Some(oldest_commit.tree_oid()))?;

        if let Some(change) = diff.changes().get(&path)
            && change.matches_filter(DiffFilter::RENAMED)
            && let Some(old_path) = change.renamed_from()
        {
            debug_log!(
                "rename boundary: {} was {}",
                path.display(),
                old_path.display()
            );
            let old_path = old_path.to_path_buf();
            self.walk(filter.normalized_since(parent_oid.clone()), old_path, entries)?;
        }

        Ok(())
    }

    /// The maximal contiguous run of commits across which the path exists
    /// and changes relevantly, in the filter's order
    ///
    /// Consumption stops permanently at the first commit where the path
    /// does not resolve; the run never resumes past a gap, even if the same
    /// name reappears further back.
    fn relevant_commits(
        &self,
        filter: &TraversalFilter,
        path: &Path,
    ) -> anyhow::Result<Vec<(ObjectId, Commit)>> {
        let database = self.repository.database();
        let mut run = Vec::new();

        for (oid, commit) in RevList::new(self.repository, filter.clone()).into_iter()? {
            let Some(entry) = database.entry_at(commit.tree_oid(), path)? else {
                break;
            };

            // a root commit is the file's creation; always relevant
            if commit.is_root() {
                run.push((oid, commit));
                continue;
            }

            // merges are never kept; only a single-parent edge can
            // attribute a change to this commit
            if let [parent_oid] = commit.parents() {
                let parent = database
                    .parse_object_as_commit(parent_oid)?
                    .with_context(|| format!("Commit object not found: {parent_oid}"))?;
                let parent_entry = database.entry_at(parent.tree_oid(), path)?;

                let changed =
                    parent_entry.is_none_or(|parent_entry| parent_entry.oid != entry.oid);
                if changed {
                    run.push((oid, commit));
                }
            }
        }

        Ok(run)
    }
}

impl Repository {
    /// History of the file at `path` under the default filter
    ///
    /// Walks backward from HEAD in commit-time order, following renames.
    pub fn file_history(&self, path: &Path) -> anyhow::Result<Vec<HistoryEntry>> {
        self.file_history_with(&TraversalFilter::default(), path)
    }

    /// History of the file at `path` under a caller-supplied filter
    pub fn file_history_with(
        &self,
        filter: &TraversalFilter,
        path: &Path,
    ) -> anyhow::Result<Vec<HistoryEntry>> {
        FileHistory::new(self).full_history(filter, path)
    }
}
