use crate::common::graph::{commit_snapshot, messages, open_repository, repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;
use trail::TraversalFilter;

#[rstest]
fn history_bounded_by_since_and_until(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(&repository_dir);

    let a = commit_snapshot(&repository, &[], &[("foo.txt", "v1")], 0, "First");
    let b = commit_snapshot(&repository, &[a.clone()], &[("foo.txt", "v2")], 10, "Second");
    let c = commit_snapshot(&repository, &[b], &[("foo.txt", "v3")], 20, "Third");
    commit_snapshot(&repository, &[c.clone()], &[("foo.txt", "v4")], 30, "Fourth");

    // since: the walk starts at the given commit instead of HEAD
    let from_c = repository.file_history_with(
        &TraversalFilter {
            since: Some(c.clone()),
            ..Default::default()
        },
        Path::new("foo.txt"),
    )?;
    assert_eq!(messages(&from_c), vec!["Third", "Second", "First"]);

    // until: the bound commit and everything it reaches are excluded
    let above_a = repository.file_history_with(
        &TraversalFilter {
            until: Some(a.clone()),
            ..Default::default()
        },
        Path::new("foo.txt"),
    )?;
    assert_eq!(messages(&above_a), vec!["Fourth", "Third", "Second"]);

    // both bounds combined
    let between = repository.file_history_with(
        &TraversalFilter {
            since: Some(c),
            until: Some(a),
            ..Default::default()
        },
        Path::new("foo.txt"),
    )?;
    assert_eq!(messages(&between), vec!["Third", "Second"]);

    Ok(())
}
