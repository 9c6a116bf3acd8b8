//! Presentation seam: applies a computed `BoardView` to whatever host paints it.
pub mod markdown;

use crate::prefs::Theme;
use crate::types::Status;
use crate::view::{BoardTab, BoardView, TaskSummary};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresentError {
    #[error("No render target for column {0}")]
    MissingTarget(Status),
}

/// A host surface. Board list, header and layout always exist; columns may not.
pub trait Presenter {
    fn show_layout(&mut self, show_sidebar: bool, theme: Theme);

    fn show_boards(&mut self, boards: &[BoardTab]);

    fn show_header(&mut self, active_board: Option<&str>);

    /// Drop everything rendered in a column and write its header.
    fn clear_column(&mut self, status: Status, header: &str) -> Result<(), PresentError>;

    fn show_task(&mut self, status: Status, task: &TaskSummary) -> Result<(), PresentError>;
}

/// What a refresh actually painted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub painted: Vec<Status>,
    pub skipped: Vec<Status>,
}

impl RenderReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Full rebuild of every column. A column without a target is logged and
/// skipped; the remaining columns are still painted.
pub fn apply_view<P: Presenter + ?Sized>(view: &BoardView, presenter: &mut P) -> RenderReport {
    presenter.show_layout(view.show_sidebar, view.theme);
    presenter.show_boards(&view.boards);
    presenter.show_header(view.active_board.as_deref());

    let mut report = RenderReport::default();
    for column in &view.columns {
        match paint_column(presenter, column.status, &column.header, &column.tasks) {
            Ok(()) => report.painted.push(column.status),
            Err(e) => {
                log::error!("[taskboard.present] {}", e);
                report.skipped.push(column.status);
            }
        }
    }
    report
}

fn paint_column<P: Presenter + ?Sized>(
    presenter: &mut P,
    status: Status,
    header: &str,
    tasks: &[TaskSummary],
) -> Result<(), PresentError> {
    presenter.clear_column(status, header)?;
    for task in tasks {
        presenter.show_task(status, task)?;
    }
    Ok(())
}
