//! Filesystem side effects: creating and removing project type folders

use crate::{ProjectsError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of creating a batch of folders, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateReport {
    pub created: Vec<String>,
    pub existed: Vec<String>,
}

/// Outcome of removing a batch of folders, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveReport {
    pub deleted: Vec<String>,
    pub already_absent: Vec<String>,
}

/// Whether an idempotent operation on a single directory did anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryChange {
    Changed,
    Unchanged,
}

/// Create `base/<id>` for every identifier that is not already there.
///
/// Folders are created one level deep only; `base` has to exist. A failure
/// stops the batch and leaves folders created so far in place.
pub fn ensure_directories<I, S>(base: &Path, identifiers: I) -> Result<CreateReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = CreateReport::default();

    for identifier in identifiers {
        let identifier = identifier.as_ref();
        let dir = base.join(identifier);

        if path_exists(&dir)? {
            if !dir.is_dir() {
                return Err(ProjectsError::filesystem(
                    "create",
                    &dir,
                    io::Error::new(io::ErrorKind::AlreadyExists, "a file with this name already exists"),
                ));
            }
            debug!(path = %dir.display(), "Folder already exists");
            report.existed.push(identifier.to_string());
            continue;
        }

        fs::create_dir(&dir).map_err(|e| ProjectsError::filesystem("create", &dir, e))?;
        debug!(path = %dir.display(), "Created folder");
        report.created.push(identifier.to_string());
    }

    info!(
        created = report.created.len(),
        existed = report.existed.len(),
        "Finished creating project type folders"
    );
    Ok(report)
}

/// Recursively delete `base/<id>` for every identifier that exists.
///
/// Missing folders are reported, never treated as errors.
pub fn remove_directories<I, S>(base: &Path, identifiers: I) -> Result<RemoveReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = RemoveReport::default();

    for identifier in identifiers {
        let identifier = identifier.as_ref();
        let dir = base.join(identifier);

        match remove_path(&dir)? {
            DirectoryChange::Changed => {
                debug!(path = %dir.display(), "Deleted folder");
                report.deleted.push(identifier.to_string());
            }
            DirectoryChange::Unchanged => {
                debug!(path = %dir.display(), "Folder already absent");
                report.already_absent.push(identifier.to_string());
            }
        }
    }

    info!(
        deleted = report.deleted.len(),
        already_absent = report.already_absent.len(),
        "Finished removing project type folders"
    );
    Ok(report)
}

/// Create the `Projects` directory itself. The base path has to exist.
pub fn ensure_root(projects_dir: &Path) -> Result<DirectoryChange> {
    match fs::create_dir(projects_dir) {
        Ok(()) => {
            info!(path = %projects_dir.display(), "Created Projects directory");
            Ok(DirectoryChange::Changed)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && projects_dir.is_dir() => {
            debug!(path = %projects_dir.display(), "Projects directory already exists");
            Ok(DirectoryChange::Unchanged)
        }
        Err(e) => Err(ProjectsError::filesystem("create", projects_dir, e)),
    }
}

/// Delete the whole `Projects` tree in one operation
pub fn remove_root(projects_dir: &Path) -> Result<DirectoryChange> {
    let change = remove_path(projects_dir)?;
    if change == DirectoryChange::Changed {
        info!(path = %projects_dir.display(), "Deleted Projects directory");
    }
    Ok(change)
}

/// Remove whatever is at `path` without following symlinks
fn remove_path(path: &Path) -> Result<DirectoryChange> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(DirectoryChange::Unchanged),
        Err(e) => return Err(ProjectsError::filesystem("inspect", path, e)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => Ok(DirectoryChange::Changed),
        // Gone between the check and the delete
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(DirectoryChange::Unchanged),
        Err(e) => Err(ProjectsError::filesystem("delete", path, e)),
    }
}

fn path_exists(path: &Path) -> Result<bool> {
    path.try_exists()
        .map_err(|e| ProjectsError::filesystem("inspect", path, e))
}

/// Paths a run operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsLayout {
    pub base: PathBuf,
    pub projects_dir: PathBuf,
}

impl ProjectsLayout {
    pub const DIRECTORY_NAME: &'static str = "Projects";

    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        let projects_dir = base.join(Self::DIRECTORY_NAME);
        Self { base, projects_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    impl ProjectsLayout {
        fn type_dir(&self, identifier: &str) -> PathBuf {
            self.projects_dir.join(identifier)
        }
    }

    /// Sorted names of the entries directly under `dir`
    fn list_entries(dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn projects_in(temp: &TempDir) -> ProjectsLayout {
        let layout = ProjectsLayout::new(temp.path());
        ensure_root(&layout.projects_dir).unwrap();
        layout
    }

    #[test]
    fn test_create_go_and_rust() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectsLayout::new(temp.path());

        assert_eq!(ensure_root(&layout.projects_dir).unwrap(), DirectoryChange::Changed);
        let report = ensure_directories(&layout.projects_dir, ["Go", "Rust"]).unwrap();

        assert_eq!(report.created, vec!["Go", "Rust"]);
        assert!(report.existed.is_empty());
        assert!(layout.type_dir("Go").is_dir());
        assert!(layout.type_dir("Rust").is_dir());
    }

    #[test]
    fn test_create_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);

        ensure_directories(&layout.projects_dir, ["Go", "Rust"]).unwrap();
        let before = list_entries(&layout.projects_dir).unwrap();

        assert_eq!(ensure_root(&layout.projects_dir).unwrap(), DirectoryChange::Unchanged);
        let report = ensure_directories(&layout.projects_dir, ["Go", "Rust"]).unwrap();

        assert!(report.created.is_empty());
        assert_eq!(report.existed, vec!["Go", "Rust"]);
        assert_eq!(list_entries(&layout.projects_dir).unwrap(), before);
    }

    #[test]
    fn test_mixed_create_keeps_input_order() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        fs::create_dir(layout.type_dir("Zig")).unwrap();

        let report = ensure_directories(&layout.projects_dir, ["Zig", "C", "Go"]).unwrap();
        assert_eq!(report.created, vec!["C", "Go"]);
        assert_eq!(report.existed, vec!["Zig"]);
    }

    #[test]
    fn test_create_requires_existing_parent() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let result = ensure_directories(&missing, ["Go"]);
        match result {
            Err(ProjectsError::Filesystem { action, path, .. }) => {
                assert_eq!(action, "create");
                assert_eq!(path, missing.join("Go"));
            }
            other => panic!("expected filesystem error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_over_file_fails() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        fs::write(layout.type_dir("Go"), b"not a folder").unwrap();

        let result = ensure_directories(&layout.projects_dir, ["Go"]);
        assert!(matches!(result, Err(ProjectsError::Filesystem { .. })));
    }

    #[test]
    fn test_remove_only_selected() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        ensure_directories(&layout.projects_dir, ["Go", "Rust"]).unwrap();

        let report = remove_directories(&layout.projects_dir, ["Go"]).unwrap();

        assert_eq!(report.deleted, vec!["Go"]);
        assert!(report.already_absent.is_empty());
        assert!(!layout.type_dir("Go").exists());
        assert!(layout.type_dir("Rust").is_dir());
    }

    #[test]
    fn test_remove_non_empty_tree() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        let nested = layout.type_dir("Rust").join("my-crate").join("src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("main.rs"), "fn main() {}").unwrap();

        let report = remove_directories(&layout.projects_dir, ["Rust"]).unwrap();
        assert_eq!(report.deleted, vec!["Rust"]);
        assert!(!layout.type_dir("Rust").exists());
    }

    #[test]
    fn test_remove_absent_is_reported_not_raised() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        ensure_directories(&layout.projects_dir, ["Go"]).unwrap();

        let report = remove_directories(&layout.projects_dir, ["Python", "Go", "Lua"]).unwrap();
        assert_eq!(report.deleted, vec!["Go"]);
        assert_eq!(report.already_absent, vec!["Python", "Lua"]);
    }

    #[test]
    fn test_create_then_remove_restores_listing() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        fs::create_dir(layout.type_dir("Keep")).unwrap();
        let before = list_entries(&layout.projects_dir).unwrap();

        let selection = ["Go", "Rust", "Python"];
        ensure_directories(&layout.projects_dir, selection).unwrap();
        remove_directories(&layout.projects_dir, selection).unwrap();

        assert_eq!(list_entries(&layout.projects_dir).unwrap(), before);
        assert!(layout.projects_dir.is_dir());
    }

    #[test]
    fn test_remove_root_deletes_everything() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        ensure_directories(&layout.projects_dir, ["Go", "Rust"]).unwrap();
        fs::write(layout.type_dir("Go").join("notes.txt"), "hello").unwrap();

        assert_eq!(remove_root(&layout.projects_dir).unwrap(), DirectoryChange::Changed);
        assert!(!layout.projects_dir.exists());
        assert!(temp.path().exists());

        assert_eq!(remove_root(&layout.projects_dir).unwrap(), DirectoryChange::Unchanged);
    }

    #[test]
    fn test_ensure_root_requires_existing_base() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("no-such-dir").join("typo");
        let layout = ProjectsLayout::new(&base);

        match ensure_root(&layout.projects_dir) {
            Err(ProjectsError::Filesystem { action, path, .. }) => {
                assert_eq!(action, "create");
                assert_eq!(path, layout.projects_dir);
            }
            other => panic!("expected filesystem error, got {:?}", other),
        }
        assert!(!temp.path().join("no-such-dir").exists());
    }

    #[test]
    fn test_ensure_root_over_file_fails() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectsLayout::new(temp.path());
        fs::write(&layout.projects_dir, b"not a folder").unwrap();

        let result = ensure_root(&layout.projects_dir);
        assert!(matches!(result, Err(ProjectsError::Filesystem { .. })));
    }

    #[test]
    fn test_create_batch_stops_at_failure() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        fs::write(layout.type_dir("Rust"), b"not a folder").unwrap();

        let result = ensure_directories(&layout.projects_dir, ["Go", "Rust", "Zig"]);

        match result {
            Err(ProjectsError::Filesystem { path, .. }) => assert_eq!(path, layout.type_dir("Rust")),
            other => panic!("expected filesystem error, got {:?}", other),
        }
        assert!(layout.type_dir("Go").is_dir());
        assert!(!layout.type_dir("Zig").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_batch_stops_at_failure() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        ensure_directories(&layout.projects_dir, ["Go", "Rust", "Zig"]).unwrap();
        let locked = layout.type_dir("Rust").join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("keep.txt"), "keep").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores permission bits, so there is nothing to observe
        if fs::remove_file(locked.join("keep.txt")).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = remove_directories(&layout.projects_dir, ["Go", "Rust", "Zig"]);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(ProjectsError::Filesystem { action, .. }) => assert_eq!(action, "delete"),
            other => panic!("expected filesystem error, got {:?}", other),
        }
        assert!(!layout.type_dir("Go").exists());
        assert!(layout.type_dir("Rust").exists());
        assert!(layout.type_dir("Zig").is_dir());
    }

    #[test]
    fn test_layout_paths() {
        let layout = ProjectsLayout::new("/tmp/x");
        assert_eq!(layout.projects_dir, PathBuf::from("/tmp/x/Projects"));
        assert_eq!(layout.type_dir("Go"), PathBuf::from("/tmp/x/Projects/Go"));
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_symlink_leaves_target() {
        let temp = TempDir::new().unwrap();
        let layout = projects_in(&temp);
        let outside = temp.path().join("outside");
        fs::create_dir(&outside).unwrap();
        fs::write(outside.join("keep.txt"), "keep").unwrap();
        std::os::unix::fs::symlink(&outside, layout.type_dir("Go")).unwrap();

        let report = remove_directories(&layout.projects_dir, ["Go"]).unwrap();
        assert_eq!(report.deleted, vec!["Go"]);
        assert!(outside.join("keep.txt").exists());
    }
}
