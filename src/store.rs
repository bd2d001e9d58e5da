// Task store: owning collection plus persistence and queries

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::filter::TaskFilter;
use crate::json;
use crate::sort::{self, SortKey, SortOrder};
use crate::task::{Entry, Task, TaskId};

/// Ordered collection of tasks backed by a single JSON file.
///
/// One instance per process run, constructed with [`TaskStore::open`], which
/// loads the backing file (or starts empty when it is absent or corrupt).
/// Every successful mutating call persists the full sequence synchronously
/// before returning. A failed persist leaves the in-memory sequence mutated;
/// there is no rollback, and the next successful save reconciles the file.
///
/// Single-threaded by design: the store takes `&mut self` for mutation and
/// expects one caller at a time.
pub struct TaskStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl TaskStore {
    /// Open the store backed by the given file, loading its contents.
    ///
    /// Fails only on I/O errors other than "file not found"; a missing or
    /// unparseable file yields an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let tasks = json::load_tasks(&path)?;
        let entries = tasks
            .into_iter()
            .map(|task| Entry {
                id: TaskId::new(),
                task,
            })
            .collect::<Vec<_>>();

        info!(path = ?path, count = entries.len(), "task store opened");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored sequence in its current order, with session ids attached.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a task by its session id.
    pub fn get(&self, id: TaskId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Persist the full sequence to the backing file.
    ///
    /// Called by every mutator; exposed so a caller can retry after a failed
    /// save without repeating the mutation.
    pub fn save(&self) -> Result<()> {
        let tasks: Vec<Task> = self.entries.iter().map(|e| e.task.clone()).collect();
        json::save_tasks(&self.path, &tasks)
    }

    /// Validate and append a task, then save. Returns the new task's id.
    pub fn add(&mut self, task: Task) -> Result<TaskId> {
        task.validate()?;

        let id = TaskId::new();
        debug!(%id, name = %task.name, "adding task");
        self.entries.push(Entry { id, task });
        self.save()?;
        Ok(id)
    }

    /// Replace the task with the given id, then save.
    ///
    /// Returns `Ok(false)` without touching anything when no task has that
    /// id (e.g. it was deleted since the caller last queried).
    pub fn update(&mut self, id: TaskId, task: Task) -> Result<bool> {
        task.validate()?;

        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            debug!(%id, "update: no task with this id");
            return Ok(false);
        };
        entry.task = task;
        self.save()?;
        Ok(true)
    }

    /// Remove the task with the given id, then save.
    pub fn delete(&mut self, id: TaskId) -> Result<bool> {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            debug!(%id, "delete: no task with this id");
            return Ok(false);
        };
        self.entries.remove(pos);
        self.save()?;
        Ok(true)
    }

    /// Replace the task at a position in the current ordering, then save.
    ///
    /// Positional addressing is only meaningful against the ordering the
    /// caller last observed; prefer [`TaskStore::update`]. Out-of-range is
    /// not an error, just `Ok(false)`.
    pub fn update_at(&mut self, index: usize, task: Task) -> Result<bool> {
        task.validate()?;

        let Some(entry) = self.entries.get_mut(index) else {
            debug!(index, len = self.entries.len(), "update_at: index out of range");
            return Ok(false);
        };
        entry.task = task;
        self.save()?;
        Ok(true)
    }

    /// Remove the task at a position in the current ordering, then save.
    pub fn delete_at(&mut self, index: usize) -> Result<bool> {
        if index >= self.entries.len() {
            debug!(index, len = self.entries.len(), "delete_at: index out of range");
            return Ok(false);
        }
        self.entries.remove(index);
        self.save()?;
        Ok(true)
    }

    /// Return the tasks matching the filter, in stored order.
    ///
    /// Non-mutating; the returned entries carry the same ids as the stored
    /// sequence, so they remain valid handles for `update`/`delete`.
    pub fn filter(&self, filter: &TaskFilter) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(&e.task))
            .cloned()
            .collect()
    }

    /// Stable in-place sort of the stored sequence.
    ///
    /// Reorders only the in-memory sequence; the file keeps its order until
    /// the next mutating call saves. Tasks whose sort key is undefined (an
    /// unrecognized priority, a due date that does not parse) go to the end
    /// in both directions rather than failing the sort.
    pub fn sort(&mut self, key: SortKey, order: SortOrder) -> &[Entry] {
        if key == SortKey::DueDate {
            let malformed = self
                .entries
                .iter()
                .filter(|e| e.task.due_date_parsed().is_none())
                .count();
            if malformed > 0 {
                warn!(count = malformed, "tasks with malformed due dates sort last");
            }
        }

        self.entries
            .sort_by(|a, b| sort::compare(key, order, &a.task, &b.task));
        &self.entries
    }
}
