//! HEAD storage
//!
//! This crate has no branching surface: HEAD holds a commit ID directly and
//! serves as the default starting point for history traversals. Updates
//! take an exclusive lock on the ref file.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    pub fn new(path: Box<Path>) -> Self {
        Refs { path }
    }

    fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    /// Read the commit ID HEAD points at
    ///
    /// An absent or unborn (empty) HEAD yields `None`, not an error.
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let head_path = self.head_path();

        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read ref file at {:?}", head_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    /// Point HEAD at a new commit
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the ref file during the update.
    pub fn update_head(&self, oid: ObjectId) -> anyhow::Result<()> {
        let head_path = self.head_path();

        std::fs::create_dir_all(head_path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                head_path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&head_path)
            .with_context(|| format!("failed to open ref file at {:?}", head_path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(oid.as_ref().as_bytes())?;

        Ok(())
    }
}
