/// Board index. Boards are not stored; they are the distinct `board`
/// values of the task collection. Only the active selection is persisted.
use crate::storage::{load_json, save_json, KeyValueStore, StorageError, ACTIVE_BOARD_KEY};
use crate::types::Task;

/// Distinct non-empty board names in first-seen order.
pub fn derive_boards(tasks: &[Task]) -> Vec<String> {
    let mut boards: Vec<String> = Vec::new();
    for task in tasks {
        if task.board.is_empty() || boards.iter().any(|b| *b == task.board) {
            continue;
        }
        boards.push(task.board.clone());
    }
    boards
}

/// Pick the board to display: the stored selection while it still exists,
/// otherwise the first derived board. `None` when there are no boards.
pub fn resolve_active_board(stored: Option<&str>, boards: &[String]) -> Option<String> {
    match stored {
        Some(name) if boards.iter().any(|b| b == name) => Some(name.to_string()),
        Some(name) if !name.is_empty() => {
            log::info!(
                "[taskboard.boards] Stored board {:?} no longer has tasks, falling back",
                name
            );
            boards.first().cloned()
        }
        _ => boards.first().cloned(),
    }
}

/// Read the persisted selection. Empty strings count as no selection.
pub fn load_active_board<S: KeyValueStore + ?Sized>(
    storage: &S,
) -> Result<Option<String>, StorageError> {
    Ok(load_json::<Option<String>, _>(storage, ACTIVE_BOARD_KEY)?
        .flatten()
        .filter(|name| !name.is_empty()))
}

pub fn save_active_board<S: KeyValueStore + ?Sized>(
    storage: &S,
    name: &str,
) -> Result<(), StorageError> {
    save_json(storage, ACTIVE_BOARD_KEY, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use crate::types::{Status, TaskId};

    fn task(id: u64, board: &str) -> Task {
        Task {
            id: TaskId(id),
            title: format!("task {}", id),
            description: String::new(),
            status: Status::Todo,
            board: board.to_string(),
        }
    }

    #[test]
    fn test_derive_first_seen_order() {
        let tasks = [task(1, "A"), task(2, "B"), task(3, "A")];
        assert_eq!(derive_boards(&tasks), ["A", "B"]);
    }

    #[test]
    fn test_derive_skips_empty_board() {
        let tasks = [task(1, ""), task(2, "Roadmap")];
        assert_eq!(derive_boards(&tasks), ["Roadmap"]);
    }

    #[test]
    fn test_no_tasks_no_boards() {
        assert!(derive_boards(&[]).is_empty());
    }

    #[test]
    fn test_resolve_prefers_stored() {
        let boards = vec!["A".to_string(), "B".to_string()];
        assert_eq!(resolve_active_board(Some("B"), &boards).as_deref(), Some("B"));
        assert_eq!(resolve_active_board(None, &boards).as_deref(), Some("A"));
    }

    #[test]
    fn test_resolve_stale_selection_falls_back() {
        let boards = vec!["A".to_string()];
        assert_eq!(resolve_active_board(Some("Gone"), &boards).as_deref(), Some("A"));
        assert_eq!(resolve_active_board(Some("Gone"), &[]), None);
    }

    #[test]
    fn test_active_board_slot_is_json_string() {
        let storage = MemoryStorage::new();
        assert_eq!(load_active_board(&storage).unwrap(), None);

        save_active_board(&storage, "Roadmap").unwrap();
        assert_eq!(
            storage.load(ACTIVE_BOARD_KEY).unwrap().as_deref(),
            Some("\"Roadmap\"")
        );
        assert_eq!(load_active_board(&storage).unwrap().as_deref(), Some("Roadmap"));
    }

    #[test]
    fn test_null_or_empty_selection_is_none() {
        let storage = MemoryStorage::with_slots([(ACTIVE_BOARD_KEY, "null")]);
        assert_eq!(load_active_board(&storage).unwrap(), None);
        let storage = MemoryStorage::with_slots([(ACTIVE_BOARD_KEY, "\"\"")]);
        assert_eq!(load_active_board(&storage).unwrap(), None);
    }
}
