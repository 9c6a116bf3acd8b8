/// Visible board state, computed from scratch on every refresh.
use serde::Serialize;

use crate::boards::derive_boards;
use crate::prefs::{Preferences, Theme};
use crate::types::{Status, Task, TaskId, COLUMNS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardTab {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: TaskId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub status: Status,
    pub header: String,
    pub tasks: Vec<TaskSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub boards: Vec<BoardTab>,
    pub active_board: Option<String>,
    pub columns: Vec<ColumnView>,
    pub show_sidebar: bool,
    pub theme: Theme,
}

impl BoardView {
    pub fn column(&self, status: Status) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.status == status)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

/// Bucket the active board's tasks into the fixed columns.
///
/// Pure: the same `(active, tasks)` always yields the same view. Every column
/// is present even when empty, and with no active board all columns are empty.
pub fn compute_view(active: Option<&str>, tasks: &[Task], prefs: &Preferences) -> BoardView {
    let boards = derive_boards(tasks)
        .into_iter()
        .map(|name| BoardTab {
            active: active == Some(name.as_str()),
            name,
        })
        .collect();

    let on_board: Vec<&Task> = match active {
        Some(board) => tasks.iter().filter(|t| t.board == board).collect(),
        None => Vec::new(),
    };

    let columns = COLUMNS
        .iter()
        .map(|&status| ColumnView {
            status,
            header: status.header(),
            tasks: on_board
                .iter()
                .filter(|t| t.status == status)
                .map(|t| TaskSummary {
                    id: t.id,
                    title: t.title.clone(),
                })
                .collect(),
        })
        .collect();

    BoardView {
        boards,
        active_board: active.map(str::to_string),
        columns,
        show_sidebar: prefs.show_sidebar,
        theme: prefs.theme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, board: &str, status: Status) -> Task {
        Task {
            id: TaskId(id),
            title: format!("t{}", id),
            description: String::new(),
            status,
            board: board.to_string(),
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, "A", Status::Todo),
            task(2, "B", Status::Todo),
            task(3, "A", Status::Done),
            task(4, "A", Status::Todo),
            task(5, "", Status::Doing),
        ]
    }

    #[test]
    fn test_columns_in_fixed_order() {
        let view = compute_view(Some("A"), &sample(), &Preferences::default());
        let order: Vec<_> = view.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(order, ["TODO", "DOING", "DONE"]);
    }

    #[test]
    fn test_every_board_task_in_exactly_one_column() {
        let tasks = sample();
        let view = compute_view(Some("A"), &tasks, &Preferences::default());
        for t in tasks.iter().filter(|t| t.board == "A") {
            let hits: Vec<_> = view
                .columns
                .iter()
                .filter(|c| c.tasks.iter().any(|s| s.id == t.id))
                .collect();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].status, t.status);
        }
        assert_eq!(view.task_count(), 3);
    }

    #[test]
    fn test_other_boards_excluded() {
        let view = compute_view(Some("A"), &sample(), &Preferences::default());
        let ids: Vec<_> = view
            .columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|s| s.id))
            .collect();
        assert!(!ids.contains(&TaskId(2)));
        assert!(!ids.contains(&TaskId(5)));
    }

    #[test]
    fn test_column_keeps_insertion_order() {
        let view = compute_view(Some("A"), &sample(), &Preferences::default());
        let todo: Vec<_> = view.column(Status::Todo).unwrap().tasks.iter().map(|s| s.id).collect();
        assert_eq!(todo, [TaskId(1), TaskId(4)]);
    }

    #[test]
    fn test_empty_columns_are_present() {
        let view = compute_view(Some("B"), &sample(), &Preferences::default());
        assert_eq!(view.columns.len(), 3);
        assert!(view.column(Status::Doing).unwrap().tasks.is_empty());
        assert!(view.column(Status::Done).unwrap().tasks.is_empty());
    }

    #[test]
    fn test_no_active_board_renders_empty() {
        let view = compute_view(None, &[], &Preferences::default());
        assert!(view.boards.is_empty());
        assert_eq!(view.active_board, None);
        assert_eq!(view.columns.len(), 3);
        assert_eq!(view.task_count(), 0);
    }

    #[test]
    fn test_tabs_mark_active() {
        let view = compute_view(Some("B"), &sample(), &Preferences::default());
        assert_eq!(
            view.boards,
            vec![
                BoardTab { name: "A".into(), active: false },
                BoardTab { name: "B".into(), active: true },
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let tasks = sample();
        let prefs = Preferences::default();
        assert_eq!(
            compute_view(Some("A"), &tasks, &prefs),
            compute_view(Some("A"), &tasks, &prefs)
        );
    }
}
