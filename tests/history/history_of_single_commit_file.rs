use crate::common::graph::{commit_snapshot, open_repository, repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn history_of_single_commit_file(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(&repository_dir);

    let root = commit_snapshot(
        &repository,
        &[],
        &[("foo.txt", "created once"), ("other.txt", "noise")],
        0,
        "Add foo.txt",
    );
    commit_snapshot(
        &repository,
        &[root.clone()],
        &[("foo.txt", "created once"), ("other.txt", "changed noise")],
        10,
        "Touch other.txt",
    );

    let history = repository.file_history(Path::new("foo.txt"))?;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].oid(), &root);
    assert_eq!(history[0].path(), Path::new("foo.txt"));
    assert_eq!(history[0].commit().message(), "Add foo.txt");

    Ok(())
}
