use crate::common::graph::{commit_snapshot, messages, open_repository, repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn history_excludes_untouched_commits(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(&repository_dir);

    let c1 = commit_snapshot(
        &repository,
        &[],
        &[("foo.txt", "v1"), ("bar.txt", "b1")],
        0,
        "Add foo.txt",
    );
    let c2 = commit_snapshot(
        &repository,
        &[c1],
        &[("foo.txt", "v1"), ("bar.txt", "b2")],
        10,
        "Touch bar.txt",
    );
    let c3 = commit_snapshot(
        &repository,
        &[c2],
        &[("foo.txt", "v2"), ("bar.txt", "b2")],
        20,
        "Modify foo.txt once",
    );
    let c4 = commit_snapshot(
        &repository,
        &[c3],
        &[("foo.txt", "v2"), ("bar.txt", "b3")],
        30,
        "Touch bar.txt again",
    );
    commit_snapshot(
        &repository,
        &[c4],
        &[("foo.txt", "v3"), ("bar.txt", "b3")],
        40,
        "Modify foo.txt twice",
    );

    let history = repository.file_history(Path::new("foo.txt"))?;

    // exactly the three commits that touched foo.txt, newest to oldest
    assert_eq!(
        messages(&history),
        vec!["Modify foo.txt twice", "Modify foo.txt once", "Add foo.txt"]
    );

    Ok(())
}
