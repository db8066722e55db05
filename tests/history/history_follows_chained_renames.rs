use crate::common::graph::{commit_snapshot, messages, open_repository, paths, repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn history_follows_chained_renames(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(&repository_dir);

    let a = commit_snapshot(&repository, &[], &[("a.txt", "v1")], 0, "Add a.txt");
    let b = commit_snapshot(
        &repository,
        &[a],
        &[("b.txt", "v1")],
        10,
        "Rename a.txt to b.txt",
    );
    let c = commit_snapshot(
        &repository,
        &[b],
        &[("c.txt", "v1")],
        20,
        "Rename b.txt to c.txt",
    );
    commit_snapshot(
        &repository,
        &[c],
        &[("c.txt", "v2")],
        30,
        "Modify c.txt",
    );

    let history = repository.file_history(Path::new("c.txt"))?;

    // renames chain across every former name in one sequence
    assert_eq!(
        messages(&history),
        vec![
            "Modify c.txt",
            "Rename b.txt to c.txt",
            "Rename a.txt to b.txt",
            "Add a.txt",
        ]
    );
    assert_eq!(paths(&history), vec!["c.txt", "c.txt", "b.txt", "a.txt"]);

    Ok(())
}
