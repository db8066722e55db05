use crate::common::graph::{commit_snapshot, open_repository, repository_dir};
use assert_fs::TempDir;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn history_rejects_empty_path(repository_dir: TempDir) {
    let repository = open_repository(&repository_dir);
    commit_snapshot(&repository, &[], &[("file.txt", "content")], 0, "Add file");

    let result = repository.file_history(Path::new(""));

    let error = result.expect_err("an empty path must be rejected");
    assert!(error.to_string().contains("must not be empty"));
}
