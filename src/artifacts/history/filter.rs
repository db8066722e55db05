use crate::artifacts::objects::object_id::ObjectId;

/// Commit orderings a traversal may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// Newest first by commit timestamp
    #[default]
    CommitTimeDescending,
    /// Every commit before any of its parents
    Topological,
    /// Oldest first by commit timestamp
    Reverse,
    /// Raw discovery order
    Unsorted,
}

impl SortStrategy {
    /// Whether the history walk runs under this strategy
    ///
    /// Only the two newest-first orderings qualify; the walk substitutes
    /// the default for anything else.
    pub fn is_supported_for_history(&self) -> bool {
        matches!(
            self,
            SortStrategy::CommitTimeDescending | SortStrategy::Topological
        )
    }
}

/// Caller-supplied traversal configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalFilter {
    pub sort: SortStrategy,
    /// Commit the walk starts from; HEAD when absent
    pub since: Option<ObjectId>,
    /// Commits reachable from here, itself included, are excluded
    pub until: Option<ObjectId>,
    /// Follow only first-parent edges
    pub first_parent_only: bool,
}

impl TraversalFilter {
    /// Copy of this filter safe for the history walk
    ///
    /// An unsupported sort strategy is silently replaced by the default;
    /// `since`, `until`, and `first_parent_only` are copied verbatim.
    /// The substitution is deliberate leniency, not an error path.
    pub fn normalized(&self) -> Self {
        Self {
            sort: if self.sort.is_supported_for_history() {
                self.sort
            } else {
                SortStrategy::default()
            },
            ..self.clone()
        }
    }

    /// Normalized copy with the starting bound moved to the given commit
    ///
    /// Used when the walk re-enters at a rename boundary.
    pub fn normalized_since(&self, since: ObjectId) -> Self {
        Self {
            since: Some(since),
            ..self.normalized()
        }
    }
}
