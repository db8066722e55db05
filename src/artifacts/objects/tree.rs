//! Tree object
//!
//! Trees represent one directory level: entries for files (blobs) and
//! subdirectories (other trees), each with a name and a mode.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! ## Building
//!
//! Trees are either loaded from the database (read side) or built from a
//! flat list of `(path, entry)` pairs that gets folded into the nested
//! directory structure (write side). Storing a built tree visits children
//! before parents, since a parent's serialization embeds its children's
//! object IDs.

use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::{Component, PathBuf};

/// Write-side tree entry: a file or a nested directory
#[derive(Debug, Clone)]
enum TreeEntry {
    File(DatabaseEntry),
    Directory(Tree),
}

impl TreeEntry {
    fn mode(&self) -> EntryMode {
        match self {
            TreeEntry::File(entry) => entry.mode,
            TreeEntry::Directory(_) => EntryMode::Directory,
        }
    }

    fn oid(&self) -> anyhow::Result<ObjectId> {
        match self {
            TreeEntry::File(entry) => Ok(entry.oid.clone()),
            TreeEntry::Directory(tree) => tree.object_id(),
        }
    }
}

/// Tree object representing a directory snapshot
///
/// Two sets of entries are maintained:
/// - `readable_entries`: filled when a tree is loaded from the database
/// - `writeable_entries`: filled when a tree is being built for storage
#[derive(Debug, Clone, Default)]
pub struct Tree {
    /// Entries loaded from the database (read mode)
    readable_entries: BTreeMap<String, DatabaseEntry>,
    /// Entries being built (write mode)
    writeable_entries: BTreeMap<String, TreeEntry>,
}

impl Tree {
    /// Build a nested tree from a flat list of paths and entries
    ///
    /// Intermediate directories are created as needed; each multi-segment
    /// path descends into (or creates) the subtree for its leading segment.
    pub fn build(
        entries: impl IntoIterator<Item = (PathBuf, DatabaseEntry)>,
    ) -> anyhow::Result<Self> {
        let mut root = Self::default();

        for (path, entry) in entries {
            let components = path
                .components()
                .map(|component| match component {
                    Component::Normal(name) => name
                        .to_str()
                        .map(str::to_string)
                        .context("Invalid path component"),
                    _ => Err(anyhow::anyhow!(
                        "Invalid path component in {}",
                        path.display()
                    )),
                })
                .collect::<anyhow::Result<Vec<String>>>()?;

            anyhow::ensure!(!components.is_empty(), "Empty tree entry path");
            root.add_entry(&components, entry);
        }

        Ok(root)
    }

    fn add_entry(&mut self, components: &[String], entry: DatabaseEntry) {
        match components {
            [] => unreachable!("add_entry called with no components"),
            [name] => {
                self.writeable_entries
                    .insert(name.clone(), TreeEntry::File(entry));
            }
            [directory, rest @ ..] => {
                // directory keys carry a trailing '/' so they sort like git trees
                let key = format!("{directory}/");
                let subtree = match self
                    .writeable_entries
                    .entry(key)
                    .or_insert_with(|| TreeEntry::Directory(Tree::default()))
                {
                    TreeEntry::Directory(tree) => tree,
                    TreeEntry::File(_) => unreachable!("file and directory share a name"),
                };
                subtree.add_entry(rest, entry);
            }
        }
    }

    /// Traverse the built tree depth-first, children before parents
    ///
    /// The post-order visit is what makes storing possible: a child's OID
    /// must exist before the parent serializes.
    pub fn traverse<F>(&self, func: &F) -> anyhow::Result<()>
    where
        F: Fn(&Tree) -> anyhow::Result<()>,
    {
        for entry in self.writeable_entries.values() {
            if let TreeEntry::Directory(tree) = entry {
                tree.traverse(func)?;
            }
        }
        func(self)?;

        Ok(())
    }

    /// Look up a loaded entry by its name within this directory level
    pub fn get(&self, name: &str) -> Option<&DatabaseEntry> {
        self.readable_entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
        self.readable_entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, DatabaseEntry)> {
        self.readable_entries.into_iter()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::new();

        for (name, tree_entry) in &self.writeable_entries {
            let name = name.trim_end_matches('/');

            let header = format!("{} {}", tree_entry.mode().as_str(), name);
            content_bytes.write_all(header.as_bytes())?;
            content_bytes.push(0);
            tree_entry.oid()?.write_h40_to(&mut content_bytes)?;
        }

        let mut tree_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        tree_bytes.write_all(header.as_bytes())?;
        tree_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(tree_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if *mode_bytes.last().unwrap() != b' ' {
                return Err(anyhow::anyhow!("unexpected EOF in mode"));
            }
            mode_bytes.pop(); // drop the space

            let mode_str = std::str::from_utf8(&mode_bytes)?;
            let mode = EntryMode::from_octal_str(mode_str)?;

            name_bytes.clear();
            let n = reader.read_until(b'\0', &mut name_bytes)?;
            if n == 0 || *name_bytes.last().unwrap() != b'\0' {
                return Err(anyhow::anyhow!("unexpected EOF in name"));
            }
            name_bytes.pop(); // drop NUL
            let name = std::str::from_utf8(&name_bytes)?.to_owned();

            let oid =
                ObjectId::read_h40_from(&mut reader).context("unexpected EOF in object id")?;

            entries.insert(name, DatabaseEntry::new(oid, mode));
        }

        Ok(Tree {
            readable_entries: entries,
            writeable_entries: Default::default(),
        })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
