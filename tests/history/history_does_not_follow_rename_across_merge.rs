use crate::common::graph::{commit_snapshot, messages, open_repository, paths, repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn history_does_not_follow_rename_across_merge(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(&repository_dir);

    let a = commit_snapshot(
        &repository,
        &[],
        &[("foo.txt", "v1"), ("keep.txt", "k")],
        0,
        "Add foo.txt",
    );
    let b = commit_snapshot(
        &repository,
        &[a.clone()],
        &[("foo.txt", "v2"), ("keep.txt", "k")],
        10,
        "Modify foo.txt on left branch",
    );
    let c = commit_snapshot(
        &repository,
        &[a],
        &[("foo.txt", "v1"), ("keep.txt", "k"), ("side.txt", "s")],
        20,
        "Add side.txt on right branch",
    );
    // the merge resolution renames foo.txt as a side effect
    let m = commit_snapshot(
        &repository,
        &[b, c],
        &[("moved.txt", "v2"), ("keep.txt", "k"), ("side.txt", "s")],
        30,
        "Merge and move foo.txt",
    );
    commit_snapshot(
        &repository,
        &[m],
        &[("moved.txt", "v3"), ("keep.txt", "k"), ("side.txt", "s")],
        40,
        "Modify moved.txt",
    );

    let history = repository.file_history(Path::new("moved.txt"))?;

    // the rename happened on a merge edge, so the walk stops there: only
    // the post-merge modification is reported, nothing from foo.txt's past
    assert_eq!(messages(&history), vec!["Modify moved.txt"]);
    assert_eq!(paths(&history), vec!["moved.txt"]);

    Ok(())
}
