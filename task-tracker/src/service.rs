//! The five task operations: create, update, delete, set-status, list.
//!
//! Every operation loads the full sequence from the injected store, applies
//! one mutation or query, and writes the full sequence back when (and only
//! when) something changed. Results and signals are returned as values; the
//! binary decides how to present them.

use crate::store::{self, TaskStore};
use crate::task::{Status, StatusFilter, Task};
use chrono::Utc;
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No task with the given id exists. A reported outcome, never a crash.
    #[error("Task with id {0} not found")]
    NotFound(u32),
    /// The requested status equals the current one; nothing was persisted
    /// and `updated_at` was left untouched.
    #[error("Task {id} has already been marked as {status}")]
    AlreadyMarked { id: u32, status: Status },
    /// Malformed arguments, rejected before any load or mutate attempt.
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Storage(#[from] store::Error),
}

pub struct TaskService<'a, S: TaskStore> {
    store: &'a S,
}

impl<'a, S: TaskStore> TaskService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Appends a new `todo` task with the next free id and persists.
    pub fn create(&self, description: &str) -> Result<Task, Error> {
        let description = validated_description(description)?;
        let mut tasks = self.store.load()?;
        let task = Task::new(next_id(&tasks), description, Utc::now());
        tasks.push(task.clone());
        self.store.save(&tasks)?;
        info!("Created task {}", task.id);
        Ok(task)
    }

    /// Replaces the description of the task with the given id and persists.
    pub fn update(&self, id: u32, new_description: &str) -> Result<Task, Error> {
        let new_description = validated_description(new_description)?;
        validated_id(id)?;
        let mut tasks = self.store.load()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;
        task.rename(new_description, Utc::now());
        let updated = task.clone();
        self.store.save(&tasks)?;
        info!("Updated task {}", id);
        Ok(updated)
    }

    /// Removes the task with the given id and persists. The freed id is
    /// never reissued while a higher id remains in the sequence.
    pub fn delete(&self, id: u32) -> Result<(), Error> {
        validated_id(id)?;
        let mut tasks = self.store.load()?;
        let position = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;
        tasks.remove(position);
        self.store.save(&tasks)?;
        info!("Deleted task {}", id);
        Ok(())
    }

    /// Moves the task with the given id to `status` and persists. Signals
    /// [`Error::AlreadyMarked`] without persisting when the task is already
    /// in that status.
    pub fn set_status(&self, id: u32, status: Status) -> Result<Task, Error> {
        validated_id(id)?;
        let mut tasks = self.store.load()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::NotFound(id))?;
        if task.status == status {
            return Err(Error::AlreadyMarked { id, status });
        }
        task.mark(status, Utc::now());
        let updated = task.clone();
        self.store.save(&tasks)?;
        info!("Marked task {} as {}", id, status);
        Ok(updated)
    }

    /// Produces the tasks matching `filter`, in creation order. Read-only;
    /// an empty result is a normal outcome, not an error.
    pub fn list(&self, filter: StatusFilter) -> Result<Vec<Task>, Error> {
        let tasks = self.store.load()?;
        Ok(tasks
            .into_iter()
            .filter(|task| filter.matches(task.status))
            .collect())
    }
}

fn next_id(tasks: &[Task]) -> u32 {
    tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
}

fn validated_description(description: &str) -> Result<String, Error> {
    if description.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Task description must not be empty".to_string(),
        ));
    }
    Ok(description.to_string())
}

fn validated_id(id: u32) -> Result<(), Error> {
    if id == 0 {
        return Err(Error::InvalidInput("Task ids start at 1".to_string()));
    }
    Ok(())
}
