//! Commit history traversal
//!
//! `rev_list` walks the commit graph under a traversal filter:
//!
//! - starting point (`since`, defaulting to HEAD)
//! - excluded ancestry (`until`)
//! - first-parent-only expansion
//! - four orderings: commit-time descending, topological
//!   (children before parents), reverse, and raw discovery order

pub mod rev_list;
