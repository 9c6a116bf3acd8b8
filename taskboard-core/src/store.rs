/// Task store: the canonical, persisted task collection.
///
/// Every read goes back to storage and every mutation rewrites the whole
/// `tasks` slot from a freshly read collection, so a failed write can leave
/// the view stale but never leaves a half-updated collection behind.
use std::time::{SystemTime, UNIX_EPOCH};

use crate::storage::{load_json, save_json, KeyValueStore, StorageError, TASKS_KEY};
use crate::types::{Invalid, MutationOutcome, NewTask, Task, TaskId, TaskPatch};

pub struct TaskStore<S> {
    storage: S,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Full collection in insertion order. An unwritten slot is an empty board.
    pub fn get_all_tasks(&self) -> Result<Vec<Task>, StorageError> {
        Ok(load_json::<Vec<Task>, _>(&self.storage, TASKS_KEY)?.unwrap_or_default())
    }

    /// Look up one task.
    pub fn get_task(&self, id: TaskId) -> Result<Option<Task>, StorageError> {
        Ok(self.get_all_tasks()?.into_iter().find(|t| t.id == id))
    }

    /// Replace the whole collection.
    pub fn replace_all(&self, tasks: &[Task]) -> Result<(), StorageError> {
        save_json(&self.storage, TASKS_KEY, tasks)
    }

    /// Append a new task with a freshly assigned id.
    pub fn create_task(&self, input: NewTask) -> Result<MutationOutcome, StorageError> {
        if input.title.trim().is_empty() {
            log::debug!("[taskboard.store] Rejected task with empty title");
            return Ok(MutationOutcome::Invalid(Invalid::EmptyTitle));
        }
        let Some(status) = input.status else {
            log::debug!("[taskboard.store] Rejected task without status");
            return Ok(MutationOutcome::Invalid(Invalid::MissingStatus));
        };

        let mut tasks = self.get_all_tasks()?;
        let Some(id) = next_id(&tasks, now_millis()) else {
            log::warn!("[taskboard.store] Task id space exhausted");
            return Ok(MutationOutcome::Invalid(Invalid::IdsExhausted));
        };
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            status,
            board: input.board.unwrap_or_default(),
        };
        tasks.push(task.clone());
        self.replace_all(&tasks)?;

        log::info!(
            "[taskboard.store] Created task {} in {}/{}",
            task.id,
            task.board,
            task.status
        );
        Ok(MutationOutcome::Applied(task))
    }

    /// Merge `patch` into the task with `id`. Unknown ids write nothing.
    pub fn patch_task(&self, id: TaskId, patch: TaskPatch) -> Result<MutationOutcome, StorageError> {
        if patch
            .title
            .as_deref()
            .is_some_and(|title| title.trim().is_empty())
        {
            log::debug!("[taskboard.store] Rejected patch blanking title of {}", id);
            return Ok(MutationOutcome::Invalid(Invalid::EmptyTitle));
        }

        let mut tasks = self.get_all_tasks()?;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            log::debug!("[taskboard.store] Patch for unknown task {}", id);
            return Ok(MutationOutcome::NotFound(id));
        };
        patch.apply_to(task);
        let updated = task.clone();
        self.replace_all(&tasks)?;

        log::info!("[taskboard.store] Updated task {}", id);
        Ok(MutationOutcome::Applied(updated))
    }

    /// Remove the task with `id`. Unknown ids write nothing.
    pub fn delete_task(&self, id: TaskId) -> Result<MutationOutcome, StorageError> {
        let mut tasks = self.get_all_tasks()?;
        let Some(pos) = tasks.iter().position(|t| t.id == id) else {
            log::debug!("[taskboard.store] Delete for unknown task {}", id);
            return Ok(MutationOutcome::NotFound(id));
        };
        let removed = tasks.remove(pos);
        self.replace_all(&tasks)?;

        log::info!("[taskboard.store] Deleted task {}", id);
        Ok(MutationOutcome::Applied(removed))
    }
}

/// Millisecond timestamp, bumped past every existing id. `None` once an
/// existing id is `u64::MAX`.
fn next_id(tasks: &[Task], now: u64) -> Option<TaskId> {
    let after_max = match tasks.iter().map(|t| t.id.0).max() {
        Some(max) => max.checked_add(1)?,
        None => 0,
    };
    Some(TaskId(now.max(after_max)))
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
