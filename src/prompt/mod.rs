//! Interactive questions asked before anything touches the filesystem

pub mod answers;
pub mod terminal;

pub use terminal::LinePrompter;

use crate::catalog::{Catalog, Selection};
use crate::Result;
use std::path::{Path, PathBuf};

/// Question/answer exchanges with the user
pub trait Prompter {
    /// Ask for a base path; a blank answer resolves to `default`
    fn ask_path(&mut self, message: &str, default: &Path) -> Result<PathBuf>;

    /// Ask for one or more project types. Implementations keep asking until
    /// the answer selects at least one entry.
    fn ask_multi_select(&mut self, message: &str, choices: &Catalog) -> Result<Selection>;

    /// Ask a yes/no question; a blank answer resolves to `default`
    fn ask_confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn ask_path(&mut self, message: &str, default: &Path) -> Result<PathBuf> {
        (**self).ask_path(message, default)
    }

    fn ask_multi_select(&mut self, message: &str, choices: &Catalog) -> Result<Selection> {
        (**self).ask_multi_select(message, choices)
    }

    fn ask_confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        (**self).ask_confirm(message, default)
    }
}
