/// First-run seeding so a fresh board is not blank.
use crate::prefs::Preferences;
use crate::storage::{save_json, KeyValueStore, StorageError, TASKS_KEY};
use crate::types::{Status, Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Seeded(usize),
    AlreadyPresent,
}

/// The fixed starter dataset.
pub fn initial_tasks() -> Vec<Task> {
    let entry = |id: u64, title: &str, description: &str, status: Status, board: &str| Task {
        id: TaskId(id),
        title: title.to_string(),
        description: description.to_string(),
        status,
        board: board.to_string(),
    };
    vec![
        entry(
            1,
            "Launch Epic Career",
            "Create a killer resume and portfolio",
            Status::Todo,
            "Launch Career",
        ),
        entry(
            2,
            "Master JavaScript",
            "Get comfortable with the fundamentals",
            Status::Doing,
            "Launch Career",
        ),
        entry(
            3,
            "Keep on Going",
            "You're almost there",
            Status::Done,
            "Launch Career",
        ),
        entry(
            4,
            "Plan product roadmap",
            "Outline the next three milestones",
            Status::Todo,
            "Roadmap",
        ),
        entry(
            5,
            "Gather feedback",
            "",
            Status::Doing,
            "Roadmap",
        ),
        entry(
            6,
            "Ship first release",
            "Tag and publish v1",
            Status::Done,
            "Roadmap",
        ),
    ]
}

/// Write the starter dataset and show the sidebar, unless the `tasks` slot
/// already holds something. An explicitly emptied board (`[]`) is left alone.
pub fn bootstrap<S: KeyValueStore + ?Sized>(storage: &S) -> Result<BootstrapOutcome, StorageError> {
    let existing = storage.load(TASKS_KEY)?;
    if existing.is_some_and(|raw| !raw.trim().is_empty()) {
        log::info!("[taskboard.seed] Data already exists, skipping seed");
        return Ok(BootstrapOutcome::AlreadyPresent);
    }

    let tasks = initial_tasks();
    save_json(storage, TASKS_KEY, &tasks)?;
    Preferences::save_sidebar(storage, true)?;
    log::info!("[taskboard.seed] Seeded {} starter tasks", tasks.len());
    Ok(BootstrapOutcome::Seeded(tasks.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use crate::storage::SIDEBAR_KEY;
    use crate::types::COLUMNS;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique_and_columns_covered() {
        let tasks = initial_tasks();
        let ids: HashSet<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tasks.len());
        for status in COLUMNS {
            assert!(tasks.iter().any(|t| t.status == status));
        }
        assert!(tasks.iter().all(|t| !t.title.is_empty() && !t.board.is_empty()));
    }

    #[test]
    fn test_bootstrap_seeds_empty_store() {
        let storage = MemoryStorage::new();
        let outcome = bootstrap(&storage).unwrap();
        assert_eq!(outcome, BootstrapOutcome::Seeded(initial_tasks().len()));
        assert_eq!(storage.load(SIDEBAR_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let storage = MemoryStorage::new();
        bootstrap(&storage).unwrap();
        let once = storage.snapshot();
        assert_eq!(bootstrap(&storage).unwrap(), BootstrapOutcome::AlreadyPresent);
        assert_eq!(storage.snapshot(), once);
    }

    #[test]
    fn test_bootstrap_keeps_emptied_board() {
        let storage = MemoryStorage::with_slots([(TASKS_KEY, "[]")]);
        assert_eq!(bootstrap(&storage).unwrap(), BootstrapOutcome::AlreadyPresent);
        assert_eq!(storage.load(TASKS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_bootstrap_seeds_blank_slot() {
        let storage = MemoryStorage::with_slots([(TASKS_KEY, "")]);
        assert!(matches!(bootstrap(&storage).unwrap(), BootstrapOutcome::Seeded(_)));
    }
}
