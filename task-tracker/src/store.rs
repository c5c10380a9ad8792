//! Durable access to the task file.
//!
//! The whole sequence is read and written in one piece; there is no
//! append-only log and no indexed access. Implementations of [`TaskStore`]
//! provide the artifact; the production one is [`JsonFileStore`].

use crate::task::Task;
use log::debug;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot access task file: {0}")]
    Unavailable(#[from] std::io::Error),
    #[error("Task file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Load/save of the full task sequence.
///
/// Mutating operations in the service layer read the whole sequence through
/// `load`, modify it in memory, and write it back through `save`.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Materializes an artifact holding an empty sequence if none exists.
    /// Idempotent; never overwrites an existing artifact.
    fn ensure_exists(&self) -> Result<(), Error>;

    /// Reads the entire artifact into memory.
    fn load(&self) -> Result<Vec<Task>, Error>;

    /// Serializes the complete sequence and replaces the artifact.
    fn save(&self, tasks: &[Task]) -> Result<(), Error>;
}

/// Persists the task sequence as a pretty-printed JSON array in one file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// crash mid-write never leaves a truncated artifact.
    fn replace_artifact(&self, contents: &str) -> Result<(), Error> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl TaskStore for JsonFileStore {
    fn ensure_exists(&self) -> Result<(), Error> {
        if self.path.exists() {
            return Ok(());
        }
        debug!("Creating empty task file at {}", self.path.display());
        let empty = serde_json::to_string_pretty::<Vec<Task>>(&Vec::new())?;
        self.replace_artifact(&empty)
    }

    fn load(&self) -> Result<Vec<Task>, Error> {
        let contents = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&contents)?;
        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), Error> {
        let contents = serde_json::to_string_pretty(tasks)?;
        self.replace_artifact(&contents)?;
        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
