/// Board session: the control flow between the task store, the board index
/// and the view. Every user action mutates storage first, then recomputes the
/// whole view from a fresh read.
use crate::boards::{derive_boards, load_active_board, resolve_active_board, save_active_board};
use crate::prefs::Preferences;
use crate::seed::{bootstrap, BootstrapOutcome};
use crate::storage::{KeyValueStore, StorageError};
use crate::store::TaskStore;
use crate::types::{MutationOutcome, NewTask, Task, TaskId, TaskPatch};
use crate::view::{compute_view, BoardView};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Board not found: {0}")]
    UnknownBoard(String),
}

pub struct BoardSession<S> {
    store: TaskStore<S>,
    active_board: Option<String>,
    prefs: Preferences,
    bootstrap: Option<BootstrapOutcome>,
}

impl<S: KeyValueStore> BoardSession<S> {
    /// Startup: optional first-run seed, then pick the active board.
    pub fn open(storage: S, seed: bool) -> Result<Self, SessionError> {
        let seeded = if seed { Some(bootstrap(&storage)?) } else { None };

        let store = TaskStore::new(storage);
        let boards = derive_boards(&store.get_all_tasks()?);
        let stored = load_active_board(store.storage())?;
        let active_board = resolve_active_board(stored.as_deref(), &boards);
        let prefs = Preferences::load(store.storage())?;

        log::debug!(
            "[taskboard.session] Opened with {} boards, active {:?}",
            boards.len(),
            active_board
        );
        Ok(Self {
            store,
            active_board,
            prefs,
            bootstrap: seeded,
        })
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn active_board(&self) -> Option<&str> {
        self.active_board.as_deref()
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    /// What the startup seed did, if it ran.
    pub fn bootstrap_outcome(&self) -> Option<BootstrapOutcome> {
        self.bootstrap
    }

    pub fn boards(&self) -> Result<Vec<String>, SessionError> {
        Ok(derive_boards(&self.store.get_all_tasks()?))
    }

    pub fn task(&self, id: TaskId) -> Result<Option<Task>, SessionError> {
        Ok(self.store.get_task(id)?)
    }

    /// Recompute the view. The active board is re-resolved so it never names
    /// a board whose last task is gone.
    pub fn refresh(&mut self) -> Result<BoardView, SessionError> {
        let tasks = self.store.get_all_tasks()?;
        let boards = derive_boards(&tasks);
        self.active_board = resolve_active_board(self.active_board.as_deref(), &boards);
        Ok(compute_view(self.active_board.as_deref(), &tasks, &self.prefs))
    }

    /// Create a task. Without an explicit board it lands on the active one.
    pub fn create_task(
        &mut self,
        mut input: NewTask,
    ) -> Result<(MutationOutcome, BoardView), SessionError> {
        if input.board.is_none() {
            input.board = self.active_board.clone();
        }
        let outcome = self.store.create_task(input)?;
        Ok((outcome, self.refresh()?))
    }

    pub fn edit_task(
        &mut self,
        id: TaskId,
        patch: TaskPatch,
    ) -> Result<(MutationOutcome, BoardView), SessionError> {
        let outcome = self.store.patch_task(id, patch)?;
        Ok((outcome, self.refresh()?))
    }

    pub fn delete_task(&mut self, id: TaskId) -> Result<(MutationOutcome, BoardView), SessionError> {
        let outcome = self.store.delete_task(id)?;
        Ok((outcome, self.refresh()?))
    }

    /// Display another board and remember the choice.
    pub fn switch_board(&mut self, name: &str) -> Result<BoardView, SessionError> {
        if !self.boards()?.iter().any(|b| b == name) {
            return Err(SessionError::UnknownBoard(name.to_string()));
        }
        save_active_board(self.store.storage(), name)?;
        self.active_board = Some(name.to_string());
        log::info!("[taskboard.session] Switched to board {:?}", name);
        self.refresh()
    }

    pub fn set_sidebar(&mut self, show: bool) -> Result<BoardView, SessionError> {
        Preferences::save_sidebar(self.store.storage(), show)?;
        self.prefs.show_sidebar = show;
        self.refresh()
    }

    pub fn toggle_theme(&mut self) -> Result<BoardView, SessionError> {
        let theme = self.prefs.theme.toggled();
        Preferences::save_theme(self.store.storage(), theme)?;
        self.prefs.theme = theme;
        self.refresh()
    }
}
