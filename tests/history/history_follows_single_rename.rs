use crate::common::graph::{commit_snapshot, messages, open_repository, paths, repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn history_follows_single_rename(
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
    // same content, new name: a pure rename
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

    // one contiguous sequence spanning both names, newest to oldest
    assert_eq!(
        messages(&history),
        vec![
            "Modify renamed.txt",
            "Rename foo.txt to renamed.txt",
            "Modify foo.txt",
            "Add foo.txt",
        ]
    );
    // each entry reports the path as it existed at that point in history
    assert_eq!(
        paths(&history),
        vec!["renamed.txt", "renamed.txt", "foo.txt", "foo.txt"]
    );

    Ok(())
}
