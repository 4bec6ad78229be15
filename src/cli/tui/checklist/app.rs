use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    DefaultTerminal, Frame,
};
use tracing::debug;

use super::state::{ChecklistOutcome, ChecklistState};
use super::theme::Theme;
use crate::catalog::{Catalog, Selection};
use crate::{ProjectsError, Result};

/// Full-screen multi-select over the catalog
pub struct ChecklistApp {
    title: String,
    state: ChecklistState,
    theme: Theme,
}

impl ChecklistApp {
    pub fn new(title: &str, catalog: &Catalog) -> Self {
        Self {
            title: title.to_string(),
            state: ChecklistState::from_catalog(catalog),
            theme: Theme::default(),
        }
    }

    /// Take over the terminal until the user submits or cancels
    pub fn run(mut self) -> Result<Selection> {
        let mut terminal = ratatui::init();
        let result = self.main_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<Selection> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.state.handle_key(key) {
                    ChecklistOutcome::Continue => {}
                    ChecklistOutcome::Submit(selection) => {
                        debug!(count = selection.len(), "Checklist submitted");
                        return Ok(selection);
                    }
                    ChecklistOutcome::Cancel => return Err(ProjectsError::Cancelled),
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // List
                Constraint::Length(1), // Validation message
                Constraint::Length(1), // Help
            ])
            .split(frame.area());

        self.render_list(frame, chunks[0]);
        self.render_error(frame, chunks[1]);
        render_help(frame, chunks[2], &self.theme);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let state = &self.state;
        let items: Vec<ListItem> = state
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let is_checked = state.checked.contains(&idx);
                let mut spans = vec![Span::styled(
                    format!(" {} ", Theme::checkbox(is_checked)),
                    if is_checked { self.theme.checked } else { self.theme.muted },
                )];
                spans.extend(
                    item.segments
                        .iter()
                        .map(|segment| Span::styled(segment.text.clone(), self.theme.segment_style(segment))),
                );

                let mut lines = vec![Line::from(spans)];
                if !item.description.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("     {}", item.description),
                        self.theme.muted,
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let title = format!(
            " {} ({} of {} selected) ",
            self.title,
            state.checked.len(),
            state.items.len()
        );
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(Span::styled(title, self.theme.title)))
            .highlight_style(self.theme.focused);

        let mut list_state = ListState::default().with_selected(Some(state.cursor));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect) {
        if let Some(message) = &self.state.error {
            let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {}", message), self.theme.error)));
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = Paragraph::new(Line::from(Span::styled(
        " ↑/↓ move • Space toggle • a all • Enter confirm • Esc cancel",
        theme.muted,
    )));
    frame.render_widget(help, area);
}
