use crate::common::graph::{commit_snapshot, messages, open_repository, repository_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;
use trail::{SortStrategy, TraversalFilter};

#[rstest]
#[case::reverse(SortStrategy::Reverse)]
#[case::unsorted(SortStrategy::Unsorted)]
fn history_normalizes_unsupported_sort_strategies(
    repository_dir: TempDir,
    #[case] sort: SortStrategy,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = open_repository(&repository_dir);

    let a = commit_snapshot(&repository, &[], &[("foo.txt", "v1")], 0, "Add foo.txt");
    let b = commit_snapshot(
        &repository,
        &[a],
        &[("foo.txt", "v2")],
        10,
        "Modify foo.txt once",
    );
    commit_snapshot(
        &repository,
        &[b],
        &[("foo.txt", "v3")],
        20,
        "Modify foo.txt twice",
    );

    let filter = TraversalFilter {
        sort,
        ..Default::default()
    };
    let history = repository.file_history_with(&filter, Path::new("foo.txt"))?;

    // the unsupported strategy is substituted, not rejected: the result is
    // exactly what the default filter produces
    let default_history = repository.file_history(Path::new("foo.txt"))?;
    assert_eq!(history, default_history);
    assert_eq!(
        messages(&history),
        vec!["Modify foo.txt twice", "Modify foo.txt once", "Add foo.txt"]
    );

    // the caller's filter is left untouched
    assert_eq!(filter.sort, sort);

    Ok(())
}
