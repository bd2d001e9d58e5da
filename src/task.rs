// Task record and priority model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StoreError};

/// Date format used by `due_date`, e.g. "2024-01-31".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Task priority level.
///
/// Serialized as its bare string form ("High", "Medium", "Low"). Anything
/// else found in a persisted file is preserved verbatim as `Other` so a
/// load/save round trip never rewrites data, but `Other` values are rejected
/// when a caller tries to store them through `add`/`update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    /// Sort rank: High(1) < Medium(2) < Low(3) < unrecognized(4).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
            Priority::Other(_) => 4,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Other(s) => s,
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.as_str() {
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            "Low" => Priority::Low,
            _ => Priority::Other(s),
        }
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One to-do item as persisted: exactly four string-valued fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            priority,
            due_date: due_date.into(),
        }
    }

    /// The due date as a calendar date, if it parses strictly as YYYY-MM-DD.
    pub fn due_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, DATE_FORMAT).ok()
    }

    /// Boundary validation applied before any mutating store operation.
    ///
    /// The description may be empty; everything else must hold the shape the
    /// UI layer promises to deliver.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if let Priority::Other(s) = &self.priority {
            return Err(StoreError::UnrecognizedPriority(s.clone()));
        }
        if self.due_date_parsed().is_none() {
            return Err(StoreError::InvalidDueDate(self.due_date.clone()));
        }
        Ok(())
    }
}

/// Session-scoped task identifier.
///
/// Assigned when a task enters the in-memory sequence (at load or add) and
/// never written to disk; the persisted format stays positional. Ids are
/// stable across filtering and sorting within one store instance, which is
/// what mutation-by-id relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A task annotated with its session identifier, as held by the store and
/// returned from queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: TaskId,
    pub task: Task,
}
