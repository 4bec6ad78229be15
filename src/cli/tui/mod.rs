/// Terminal User Interface used when the `tui` feature is enabled
pub mod checklist;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, Selection};
use crate::prompt::{LinePrompter, Prompter};
use crate::Result;

/// Prompter that picks project types from a full-screen checklist and asks
/// everything else line by line
pub struct TuiPrompter<R, W> {
    lines: LinePrompter<R, W>,
}

impl<R: BufRead, W: Write> TuiPrompter<R, W> {
    pub fn new(lines: LinePrompter<R, W>) -> Self {
        Self { lines }
    }
}

impl<R: BufRead, W: Write> Prompter for TuiPrompter<R, W> {
    fn ask_path(&mut self, message: &str, default: &Path) -> Result<PathBuf> {
        self.lines.ask_path(message, default)
    }

    fn ask_multi_select(&mut self, message: &str, choices: &Catalog) -> Result<Selection> {
        checklist::run(message, choices)
    }

    fn ask_confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        self.lines.ask_confirm(message, default)
    }
}
