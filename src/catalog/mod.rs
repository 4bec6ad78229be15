//! Project type catalog: the static list of folders a user can pick from

pub mod format;
pub mod loader;
pub mod selection;
pub mod types;

pub use loader::{load_catalog, CatalogLoader};
pub use selection::{Selection, EMPTY_SELECTION_MESSAGE};
pub use types::{ColorRange, ColorSpec, ProjectType, Rgb};

/// Immutable, ordered set of project types loaded once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    types: Vec<ProjectType>,
}

impl Catalog {
    /// Wrap already validated project types
    pub fn new(types: Vec<ProjectType>) -> Self {
        Self { types }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectType> {
        self.types.iter()
    }

    pub fn as_slice(&self) -> &[ProjectType] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Look up a project type by its folder name
    pub fn get(&self, identifier: &str) -> Option<&ProjectType> {
        self.types.iter().find(|t| t.identifier == identifier)
    }

    /// Position of a project type, matching folder name, label or key
    /// without regard to case
    pub fn position_ignore_case(&self, name: &str) -> Option<usize> {
        self.types.iter().position(|t| {
            t.identifier.eq_ignore_ascii_case(name)
                || t.label.eq_ignore_ascii_case(name)
                || t.key.eq_ignore_ascii_case(name)
        })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectType;
    type IntoIter = std::slice::Iter<'a, ProjectType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_type(key: &str, identifier: &str, label: &str) -> ProjectType {
        ProjectType {
            key: key.to_string(),
            identifier: identifier.to_string(),
            label: label.to_string(),
            description: String::new(),
            color: ColorSpec::Plain,
        }
    }

    #[test]
    fn test_lookup_by_identifier_is_exact() {
        let catalog = Catalog::new(vec![project_type("go", "Go", "Go")]);
        assert!(catalog.get("Go").is_some());
        assert!(catalog.get("go").is_none());
    }

    #[test]
    fn test_position_ignore_case_checks_label_and_key() {
        let catalog = Catalog::new(vec![
            project_type("go", "Go", "Go"),
            project_type("csharp", "CSharp", "C#"),
        ]);
        assert_eq!(catalog.position_ignore_case("GO"), Some(0));
        assert_eq!(catalog.position_ignore_case("c#"), Some(1));
        assert_eq!(catalog.position_ignore_case("csharp"), Some(1));
        assert_eq!(catalog.position_ignore_case("cobol"), None);
    }
}
