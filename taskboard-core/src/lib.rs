//! Kanban task board core: a persisted task collection, the boards derived
//! from it, and the per-column view recomputed after every change.

pub mod boards;
pub mod prefs;
pub mod present;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;
pub mod types;
pub mod view;

pub use session::{BoardSession, SessionError};
pub use storage::{KeyValueStore, StorageError};
pub use types::{MutationOutcome, NewTask, Status, Task, TaskId, TaskPatch};
pub use view::BoardView;
