use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single unit of work tracked in the task file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The three states a task can be in. There is no forced progression; any
/// status may move to any other.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// Selects which tasks a listing produces.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Todo,
    InProgress,
    Done,
}

impl Task {
    /// Creates a task in the initial `todo` state. Both timestamps are
    /// stamped from the same instant, so `updated_at == created_at` at birth.
    pub fn new(id: u32, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the description and refreshes `updated_at`.
    pub fn rename(&mut self, description: String, now: DateTime<Utc>) {
        self.description = description;
        self.updated_at = now;
    }

    /// Moves the task to `status` and refreshes `updated_at`. Callers guard
    /// against the identity transition before calling.
    pub fn mark(&mut self, status: Status, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Task ID {}: {} - {}",
            self.id, self.description, self.status
        )
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        };
        write!(f, "{}", status)
    }
}

impl StatusFilter {
    /// Whether a task with the given status belongs in the listing.
    pub fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Todo => status == Status::Todo,
            Self::InProgress => status == Status::InProgress,
            Self::Done => status == Status::Done,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let filter = match self {
            Self::All => "all",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        };
        write!(f, "{}", filter)
    }
}
