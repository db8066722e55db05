use crate::common::graph::{commit_snapshot, contents, open_repository, repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn relevant_blobs_collapse_rename_only_commits(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(&repository_dir);

    let a = commit_snapshot(&repository, &[], &[("foo.txt", "v1")], 0, "Add foo.txt");
    let b = commit_snapshot(
        &repository,
        &[a],
        &[("foo.txt", "v2")],
        10,
        "Modify foo.txt",
    );
    let c = commit_snapshot(
        &repository,
        &[b],
        &[("renamed.txt", "v2")],
        20,
        "Rename foo.txt to renamed.txt",
    );
    commit_snapshot(
        &repository,
        &[c],
        &[("renamed.txt", "v3")],
        30,
        "Modify renamed.txt",
    );

    let history = repository.file_history(Path::new("renamed.txt"))?;
    assert_eq!(history.len(), 4);

    let blobs = repository.relevant_blobs(&history)?;

    // four entries but three contents: the rename-only entry carries the
    // same bytes as the modification right before it and collapses away
    assert_eq!(contents(&blobs), vec!["v3", "v2", "v1"]);

    Ok(())
}
