/// User actions of the board, translated into session calls.
use std::io::Write;

use clap::{Subcommand, ValueEnum};
use taskboard_core::present::markdown::MarkdownPresenter;
use taskboard_core::present::apply_view;
use taskboard_core::types::Invalid;
use taskboard_core::{
    BoardSession, BoardView, KeyValueStore, MutationOutcome, NewTask, SessionError, Status,
    StorageError, TaskId, TaskPatch,
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Visibility {
    Show,
    Hide,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the active board
    Show,
    /// List boards, marking the active one
    Boards,
    /// Print one task with its description
    Task { id: TaskId },
    /// Add a task (to the active board unless --board is given)
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long, default_value = "todo")]
        status: Status,
        #[arg(short, long)]
        board: Option<String>,
    },
    /// Change fields of an existing task
    Edit {
        id: TaskId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        status: Option<Status>,
        #[arg(short, long)]
        board: Option<String>,
    },
    /// Delete a task
    Delete { id: TaskId },
    /// Display another board
    Switch { board: String },
    /// Show or hide the board list
    Sidebar {
        #[arg(value_enum)]
        state: Visibility,
    },
    /// Toggle between dark and light theme
    Theme,
}

/// Output settings of the text host.
#[derive(Debug, Clone)]
pub struct Output {
    pub json: bool,
    pub columns: Vec<Status>,
}

pub fn execute<S, W>(
    session: &mut BoardSession<S>,
    command: Command,
    output: &Output,
    out: &mut W,
) -> Result<(), CliError>
where
    S: KeyValueStore,
    W: Write,
{
    let view = match command {
        Command::Show => session.refresh()?,
        Command::Boards => {
            let active = session.active_board().map(str::to_string);
            for board in session.boards()? {
                let marker = if Some(&board) == active.as_ref() { "*" } else { " " };
                writeln!(out, "{} {}", marker, board)?;
            }
            return Ok(());
        }
        Command::Task { id } => {
            let task = session.task(id)?.ok_or(CliError::TaskNotFound(id))?;
            if output.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&task)?)?;
            } else {
                writeln!(out, "#{} {} [{}] on {}", task.id, task.title, task.status, task.board)?;
                if !task.description.is_empty() {
                    writeln!(out, "\n{}", task.description)?;
                }
            }
            return Ok(());
        }
        Command::Add {
            title,
            description,
            status,
            board,
        } => {
            let input = NewTask {
                title,
                description,
                status: Some(status),
                board,
            };
            let (outcome, view) = session.create_task(input)?;
            report(&outcome);
            view
        }
        Command::Edit {
            id,
            title,
            description,
            status,
            board,
        } => {
            let patch = TaskPatch {
                title,
                description,
                status,
                board,
            };
            let (outcome, view) = session.edit_task(id, patch)?;
            report(&outcome);
            view
        }
        Command::Delete { id } => {
            let (outcome, view) = session.delete_task(id)?;
            report(&outcome);
            view
        }
        Command::Switch { board } => session.switch_board(&board)?,
        Command::Sidebar { state } => session.set_sidebar(state == Visibility::Show)?,
        Command::Theme => session.toggle_theme()?,
    };
    paint(&view, output, out)
}

/// Surface outcomes the store treats as silent no-ops.
fn report(outcome: &MutationOutcome) {
    match outcome {
        MutationOutcome::Applied(_) => {}
        MutationOutcome::NotFound(id) => eprintln!("warning: no task with id {}", id),
        MutationOutcome::Invalid(Invalid::EmptyTitle) => {
            eprintln!("warning: title must not be empty, nothing saved")
        }
        MutationOutcome::Invalid(reason) => eprintln!("warning: {}, nothing saved", reason),
    }
}

fn paint<W: Write>(view: &BoardView, output: &Output, out: &mut W) -> Result<(), CliError> {
    if output.json {
        writeln!(out, "{}", serde_json::to_string_pretty(view)?)?;
        return Ok(());
    }
    let mut presenter = MarkdownPresenter::new(output.columns.clone());
    let render = apply_view(view, &mut presenter);
    if !render.is_complete() {
        log::warn!("[taskboard.cli] Columns without a target: {:?}", render.skipped);
    }
    out.write_all(presenter.render().as_bytes())?;
    Ok(())
}
