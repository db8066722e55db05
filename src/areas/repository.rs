use crate::areas::database::Database;
use crate::areas::refs::Refs;
use anyhow::Context;
use std::path::Path;

/// Directory holding the object database and refs, under the repository root
const REPO_DIR: &str = ".trail";

pub struct Repository {
    path: Box<Path>,
    database: Database,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &str) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("failed to create repository at {}", path.display()))?;
        }
        let path = path.canonicalize()?;

        let database = Database::new(path.join(REPO_DIR).join("objects").into_boxed_path());
        let refs = Refs::new(path.join(REPO_DIR).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            database,
            refs,
        })
    }

    /// Create the on-disk layout (objects directory, unborn HEAD)
    pub fn init(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.database.objects_path()).with_context(|| {
            format!(
                "failed to create objects directory at {}",
                self.database.objects_path().display()
            )
        })?;

        let head_path = self.path.join(REPO_DIR).join("HEAD");
        if !head_path.exists() {
            std::fs::write(&head_path, b"")
                .with_context(|| format!("failed to create HEAD at {}", head_path.display()))?;
        }

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
