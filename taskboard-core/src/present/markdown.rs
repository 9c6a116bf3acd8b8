/// Renders a board view as kanban markdown:
///   --- front matter (kanban-plugin: board) ---
///   ## COLUMN
///   - [ ] Task title ^id
///   %% sidebar %%
use crate::prefs::Theme;
use crate::types::{Status, COLUMNS};
use crate::view::{BoardTab, TaskSummary};

use super::{PresentError, Presenter};

struct ColumnBuffer {
    status: Status,
    header: String,
    lines: Vec<String>,
}

pub struct MarkdownPresenter {
    targets: Vec<Status>,
    show_sidebar: bool,
    theme: Theme,
    boards: Vec<BoardTab>,
    active_board: Option<String>,
    columns: Vec<ColumnBuffer>,
}

impl Default for MarkdownPresenter {
    fn default() -> Self {
        Self::new(COLUMNS.to_vec())
    }
}

impl MarkdownPresenter {
    /// Only columns listed in `targets` can be painted.
    pub fn new(targets: Vec<Status>) -> Self {
        Self {
            targets,
            show_sidebar: false,
            theme: Theme::default(),
            boards: Vec::new(),
            active_board: None,
            columns: Vec::new(),
        }
    }

    fn column_mut(&mut self, status: Status) -> Result<&mut ColumnBuffer, PresentError> {
        self.columns
            .iter_mut()
            .find(|c| c.status == status)
            .ok_or(PresentError::MissingTarget(status))
    }

    pub fn render(&self) -> String {
        let mut markdown = String::new();

        markdown.push_str("---\nkanban-plugin: board\n");
        if let Some(board) = &self.active_board {
            markdown.push_str(&format!("board: {}\n", board));
        }
        let theme = match self.theme {
            Theme::Dark => "dark",
            Theme::Light => "light",
        };
        markdown.push_str(&format!("theme: {}\n---\n\n", theme));

        for column in &self.columns {
            markdown.push_str(&format!("## {}\n", column.header));
            for line in &column.lines {
                markdown.push_str(line);
                markdown.push('\n');
            }
            markdown.push('\n');
        }

        if self.show_sidebar && !self.boards.is_empty() {
            markdown.push_str("%% boards\n");
            for tab in &self.boards {
                let marker = if tab.active { "*" } else { " " };
                markdown.push_str(&format!("{} {}\n", marker, tab.name));
            }
            markdown.push_str("%%\n");
        }

        markdown
    }
}

impl Presenter for MarkdownPresenter {
    fn show_layout(&mut self, show_sidebar: bool, theme: Theme) {
        self.show_sidebar = show_sidebar;
        self.theme = theme;
    }

    fn show_boards(&mut self, boards: &[BoardTab]) {
        self.boards = boards.to_vec();
    }

    fn show_header(&mut self, active_board: Option<&str>) {
        self.active_board = active_board.map(str::to_string);
    }

    fn clear_column(&mut self, status: Status, header: &str) -> Result<(), PresentError> {
        if !self.targets.contains(&status) {
            return Err(PresentError::MissingTarget(status));
        }
        match self.columns.iter().position(|c| c.status == status) {
            Some(pos) => {
                let column = &mut self.columns[pos];
                column.header = header.to_string();
                column.lines.clear();
            }
            None => self.columns.push(ColumnBuffer {
                status,
                header: header.to_string(),
                lines: Vec::new(),
            }),
        }
        Ok(())
    }

    fn show_task(&mut self, status: Status, task: &TaskSummary) -> Result<(), PresentError> {
        let checkbox = if status == Status::Done { "- [x] " } else { "- [ ] " };
        let title = task.title.replace("\r\n", " ").replace('\n', " ");
        let column = self.column_mut(status)?;
        column.lines.push(format!("{}{} ^{}", checkbox, title, task.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::Preferences;
    use crate::present::apply_view;
    use crate::seed::initial_tasks;
    use crate::view::compute_view;

    #[test]
    fn test_renders_seeded_board() {
        let view = compute_view(Some("Launch Career"), &initial_tasks(), &Preferences::default());
        let mut presenter = MarkdownPresenter::default();
        apply_view(&view, &mut presenter);

        let expected = "\
---
kanban-plugin: board
board: Launch Career
theme: dark
---

## TODO
- [ ] Launch Epic Career ^1

## DOING
- [ ] Master JavaScript ^2

## DONE
- [x] Keep on Going ^3

";
        assert_eq!(presenter.render(), expected);
    }

    #[test]
    fn test_sidebar_lists_boards() {
        let prefs = Preferences {
            show_sidebar: true,
            theme: Theme::Light,
        };
        let view = compute_view(Some("Roadmap"), &initial_tasks(), &prefs);
        let mut presenter = MarkdownPresenter::default();
        apply_view(&view, &mut presenter);

        let out = presenter.render();
        assert!(out.contains("theme: light\n"));
        assert!(out.ends_with("%% boards\n  Launch Career\n* Roadmap\n%%\n"));
    }

    #[test]
    fn test_missing_column_target() {
        let view = compute_view(Some("Roadmap"), &initial_tasks(), &Preferences::default());
        let mut presenter = MarkdownPresenter::new(vec![Status::Todo, Status::Done]);
        let report = apply_view(&view, &mut presenter);

        assert_eq!(report.skipped, [Status::Doing]);
        let out = presenter.render();
        assert!(out.contains("## TODO\n- [ ] Plan product roadmap ^4\n"));
        assert!(!out.contains("## DOING"));
        assert!(out.contains("## DONE\n- [x] Ship first release ^6\n"));
    }

    #[test]
    fn test_repaint_replaces_previous_content() {
        let mut presenter = MarkdownPresenter::default();
        let prefs = Preferences::default();
        apply_view(&compute_view(Some("Roadmap"), &initial_tasks(), &prefs), &mut presenter);
        apply_view(&compute_view(Some("Launch Career"), &initial_tasks(), &prefs), &mut presenter);

        let out = presenter.render();
        assert!(!out.contains("Ship first release"));
        assert_eq!(out.matches("## TODO").count(), 1);
    }
}
