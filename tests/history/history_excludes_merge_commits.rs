use crate::common::graph::{
    commit_snapshot, contents, messages, open_repository, repository_dir,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn history_excludes_merge_commits(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(&repository_dir);

    let a = commit_snapshot(&repository, &[], &[("foo.txt", "base")], 0, "Add foo.txt");
    let b = commit_snapshot(
        &repository,
        &[a.clone()],
        &[("foo.txt", "left")],
        10,
        "Modify foo.txt on left branch",
    );
    let c = commit_snapshot(
        &repository,
        &[a],
        &[("foo.txt", "right")],
        20,
        "Modify foo.txt on right branch",
    );
    // the merge resolves the conflict with brand-new content
    commit_snapshot(
        &repository,
        &[b, c],
        &[("foo.txt", "merged")],
        30,
        "Merge branches",
    );

    let history = repository.file_history(Path::new("foo.txt"))?;

    // the merge changed the file's bytes yet is never reported
    assert_eq!(
        messages(&history),
        vec![
            "Modify foo.txt on right branch",
            "Modify foo.txt on left branch",
            "Add foo.txt",
        ]
    );

    // the merge resolution content never surfaces in the blob projection
    let blobs = repository.relevant_blobs(&history)?;
    assert_eq!(contents(&blobs), vec!["right", "left", "base"]);

    Ok(())
}
