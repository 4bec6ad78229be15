use std::collections::BTreeSet;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::format::{label_segments, LabelSegment};
use crate::catalog::{Catalog, Selection};
use crate::ProjectsError;

/// One row of the checklist
#[derive(Debug, Clone)]
pub struct ChecklistItem {
    pub identifier: String,
    pub segments: Vec<LabelSegment>,
    pub description: String,
}

/// What the event loop should do after a key press
#[derive(Debug)]
pub enum ChecklistOutcome {
    Continue,
    Submit(Selection),
    Cancel,
}

/// State of the multi-select checklist
#[derive(Debug, Default)]
pub struct ChecklistState {
    pub items: Vec<ChecklistItem>,
    pub cursor: usize,
    pub checked: BTreeSet<usize>,
    /// Validation message shown under the list
    pub error: Option<String>,
}

impl ChecklistState {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let items = catalog
            .iter()
            .map(|t| ChecklistItem {
                identifier: t.identifier.clone(),
                segments: label_segments(t),
                description: t.description.trim().to_string(),
            })
            .collect();

        Self {
            items,
            ..Self::default()
        }
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.cursor = (self.cursor + 1) % self.items.len();
        }
    }

    pub fn move_up(&mut self) {
        if !self.items.is_empty() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.items.len() - 1);
        }
    }

    pub fn toggle_current(&mut self) {
        if self.cursor >= self.items.len() {
            return;
        }
        if !self.checked.remove(&self.cursor) {
            self.checked.insert(self.cursor);
        }
        self.error = None;
    }

    /// Check everything, or clear everything when all rows are checked
    pub fn toggle_all(&mut self) {
        if self.checked.len() == self.items.len() {
            self.checked.clear();
        } else {
            self.checked = (0..self.items.len()).collect();
        }
        self.error = None;
    }

    /// Selection of the checked rows; an empty checklist records the
    /// validation message and stays open
    pub fn submit(&mut self) -> Option<Selection> {
        let identifiers = self
            .checked
            .iter()
            .filter_map(|&i| self.items.get(i))
            .map(|item| item.identifier.clone());

        match Selection::new(identifiers) {
            Ok(selection) => Some(selection),
            Err(ProjectsError::Validation(message)) => {
                self.error = Some(message);
                None
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ChecklistOutcome {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ChecklistOutcome::Cancel
            }
            KeyCode::Esc | KeyCode::Char('q') => ChecklistOutcome::Cancel,
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                ChecklistOutcome::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                ChecklistOutcome::Continue
            }
            KeyCode::Char(' ') => {
                self.toggle_current();
                ChecklistOutcome::Continue
            }
            KeyCode::Char('a') => {
                self.toggle_all();
                ChecklistOutcome::Continue
            }
            KeyCode::Enter => match self.submit() {
                Some(selection) => ChecklistOutcome::Submit(selection),
                None => ChecklistOutcome::Continue,
            },
            _ => ChecklistOutcome::Continue,
        }
    }
}
