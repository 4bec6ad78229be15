//! Test doubles shared by the command tests

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::catalog::loader::{parse_catalog, CatalogFormat};
use crate::catalog::{Catalog, Selection};
use crate::prompt::Prompter;
use crate::Result;

pub fn catalog() -> Catalog {
    parse_catalog(
        r#"{
            "go": {"name": "Go"},
            "rust": {"name": "Rust"},
            "python": {"name": "Python"},
            "zig": {"name": "Zig"}
        }"#,
        CatalogFormat::Json,
        "test",
    )
    .unwrap()
}

#[derive(Debug)]
enum Answer {
    Path(Option<PathBuf>),
    Select(Vec<String>),
    Confirm(bool),
}

/// Prompter answering from a fixed script, in order
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: &Path) -> Self {
        self.answers.push_back(Answer::Path(Some(path.to_path_buf())));
        self
    }

    /// Answer the path question with a blank line
    pub fn default_path(mut self) -> Self {
        self.answers.push_back(Answer::Path(None));
        self
    }

    pub fn select(mut self, identifiers: &[&str]) -> Self {
        self.answers
            .push_back(Answer::Select(identifiers.iter().map(|s| s.to_string()).collect()));
        self
    }

    pub fn confirm(mut self, answer: bool) -> Self {
        self.answers.push_back(Answer::Confirm(answer));
        self
    }

    fn next(&mut self, question: &str) -> Answer {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for '{}'", question))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_path(&mut self, message: &str, default: &Path) -> Result<PathBuf> {
        match self.next(message) {
            Answer::Path(path) => Ok(path.unwrap_or_else(|| default.to_path_buf())),
            other => panic!("expected a path answer, script has {:?}", other),
        }
    }

    fn ask_multi_select(&mut self, message: &str, _choices: &Catalog) -> Result<Selection> {
        match self.next(message) {
            Answer::Select(identifiers) => Selection::new(identifiers),
            other => panic!("expected a selection answer, script has {:?}", other),
        }
    }

    fn ask_confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message) {
            Answer::Confirm(answer) => Ok(answer),
            other => panic!("expected a confirm answer, script has {:?}", other),
        }
    }
}
