//! Storage areas backing a repository
//!
//! - `database`: the content-addressed loose-object store
//! - `refs`: HEAD storage and resolution
//! - `repository`: the aggregate handle tying the areas together

pub mod database;
pub mod refs;
pub mod repository;
