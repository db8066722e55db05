//! Tree comparison
//!
//! `tree_diff` walks two directory snapshots and classifies every differing
//! path as added, deleted, modified, or renamed. Rename records are what the
//! history walk uses to follow a file across a change of name.

pub mod tree_diff;
