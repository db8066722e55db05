use crate::common::graph::{commit_snapshot, open_repository, repository_dir};
use assert_fs::TempDir;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn history_of_missing_path_is_empty(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(&repository_dir);

    // an unborn HEAD yields an empty history, not an error
    let history = repository.file_history(Path::new("absent.txt"))?;
    assert!(history.is_empty());

    commit_snapshot(
        &repository,
        &[],
        &[("present.txt", "content")],
        0,
        "Add present.txt",
    );

    // a path never present at the starting point yields an empty history
    let history = repository.file_history(Path::new("absent.txt"))?;
    assert!(history.is_empty());

    let blobs = repository.relevant_blobs(&history)?;
    assert!(blobs.is_empty());

    Ok(())
}
