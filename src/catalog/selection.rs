use crate::{ProjectsError, Result};

/// Message shown when a multi-select answer picks nothing
pub const EMPTY_SELECTION_MESSAGE: &str = "You must choose at least one project type.";

/// Non-empty, duplicate-free set of project type identifiers for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    identifiers: Vec<String>,
}

impl Selection {
    /// Build a selection, keeping first-seen order and dropping duplicates
    pub fn new<I, S>(identifiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for identifier in identifiers {
            let identifier = identifier.into();
            if !unique.contains(&identifier) {
                unique.push(identifier);
            }
        }

        if unique.is_empty() {
            return Err(ProjectsError::Validation(EMPTY_SELECTION_MESSAGE.to_string()));
        }

        Ok(Self { identifiers: unique })
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.iter().any(|i| i == identifier)
    }
}
