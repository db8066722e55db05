use crate::areas::repository::Repository;
use crate::artifacts::history::filter::{SortStrategy, TraversalFilter};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

#[derive(Clone, new)]
pub struct RevList<'r> {
    repository: &'r Repository,
    filter: TraversalFilter,
}

impl<'r> RevList<'r> {
    pub fn into_iter(self) -> anyhow::Result<RevListIntoIter> {
        Ok(RevListIntoIter {
            commits: self.collect_ordered()?.into_iter(),
        })
    }

    fn collect_ordered(&self) -> anyhow::Result<Vec<(ObjectId, Commit)>> {
        let start = match &self.filter.since {
            Some(oid) => Some(oid.clone()),
            None => self.repository.refs().read_head()?,
        };
        let Some(start) = start else {
            return Ok(Vec::new());
        };

        let excluded = match &self.filter.until {
            Some(oid) => self.ancestry_of(oid)?,
            None => HashSet::new(),
        };
        if excluded.contains(&start) {
            return Ok(Vec::new());
        }

        let mut discovered = Vec::new();
        let mut visited = HashSet::from([start.clone()]);
        let mut queue = VecDeque::from([start]);

        while let Some(oid) = queue.pop_front() {
            let commit = self
                .repository
                .database()
                .parse_object_as_commit(&oid)?
                .with_context(|| format!("Commit object not found: {oid}"))?;

            let parents = if self.filter.first_parent_only {
                commit
                    .parent()
                    .map(std::slice::from_ref)
                    .unwrap_or_default()
            } else {
                commit.parents()
            };
            for parent in parents {
                if !visited.contains(parent) && !excluded.contains(parent) {
                    visited.insert(parent.clone());
                    queue.push_back(parent.clone());
                }
            }

            discovered.push((oid, commit));
        }

        Ok(match self.filter.sort {
            SortStrategy::CommitTimeDescending => {
                let mut commits = discovered;
                commits.sort_by(|a, b| b.1.timestamp().cmp(&a.1.timestamp()));
                commits
            }
            SortStrategy::Reverse => {
                let mut commits = discovered;
                commits.sort_by(|a, b| a.1.timestamp().cmp(&b.1.timestamp()));
                commits
            }
            SortStrategy::Unsorted => discovered,
            SortStrategy::Topological => Self::topological_order(discovered),
        })
    }

    /// All commits reachable from the given one, itself included
    fn ancestry_of(&self, oid: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut seen = HashSet::from([oid.clone()]);
        let mut queue = VecDeque::from([oid.clone()]);

        while let Some(oid) = queue.pop_front() {
            let commit = self
                .repository
                .database()
                .parse_object_as_commit(&oid)?
                .with_context(|| format!("Commit object not found: {oid}"))?;

            for parent in commit.parents() {
                if seen.insert(parent.clone()) {
                    queue.push_back(parent.clone());
                }
            }
        }

        Ok(seen)
    }

    /// Order commits so every commit precedes all of its parents
    ///
    /// Among commits whose children have all been emitted, the most recent
    /// timestamp goes first; ties fall back to discovery order.
    fn topological_order(discovered: Vec<(ObjectId, Commit)>) -> Vec<(ObjectId, Commit)> {
        let index: HashMap<ObjectId, usize> = discovered
            .iter()
            .enumerate()
            .map(|(i, (oid, _))| (oid.clone(), i))
            .collect();

        let mut pending_children = vec![0usize; discovered.len()];
        for (_, commit) in &discovered {
            for parent in commit.parents() {
                if let Some(&i) = index.get(parent) {
                    pending_children[i] += 1;
                }
            }
        }

        let mut ready = BinaryHeap::new();
        for (i, count) in pending_children.iter().enumerate() {
            if *count == 0 {
                ready.push((discovered[i].1.timestamp(), Reverse(i)));
            }
        }

        let mut ordered_indices = Vec::with_capacity(discovered.len());
        while let Some((_, Reverse(i))) = ready.pop() {
            ordered_indices.push(i);

            for parent in discovered[i].1.parents() {
                if let Some(&p) = index.get(parent) {
                    pending_children[p] -= 1;
                    if pending_children[p] == 0 {
                        ready.push((discovered[p].1.timestamp(), Reverse(p)));
                    }
                }
            }
        }

        let mut slots: Vec<Option<(ObjectId, Commit)>> =
            discovered.into_iter().map(Some).collect();
        ordered_indices
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect()
    }
}

pub struct RevListIntoIter {
    commits: std::vec::IntoIter<(ObjectId, Commit)>,
}

impl Iterator for RevListIntoIter {
    type Item = (ObjectId, Commit);

    fn next(&mut self) -> Option<Self::Item> {
        self.commits.next()
    }
}
