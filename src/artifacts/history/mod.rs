//! File history with rename following
//!
//! The walk answers: which commits meaningfully changed the file at a path?
//!
//! - `filter`: traversal configuration and its silent normalization
//! - `entry`: the immutable result unit
//! - `follow`: commit-range extraction and the rename-follow recursion
//! - `blobs`: projection of a history onto the distinct contents it touched
//!
//! ## Algorithm
//!
//! Commits are consumed newest-first while the path stays present, keeping
//! roots and single-parent commits whose entry at the path changed. When the
//! oldest kept commit renamed the path (same object ID, different name
//! across its single-parent edge), the walk re-enters at the parent under
//! the old name and splices the runs into one sequence.

pub mod blobs;
pub mod entry;
pub mod filter;
pub mod follow;
