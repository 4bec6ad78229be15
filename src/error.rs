use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectsError {
    #[error("Failed to load project types from {origin}: {reason}")]
    ConfigLoad { origin: String, reason: String },

    #[error("{0}")]
    Validation(String),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Selection cancelled")]
    Cancelled,
}

impl ProjectsError {
    /// Build a catalog loading error for the given source
    pub fn config_load(origin: impl Into<String>, reason: impl ToString) -> Self {
        ProjectsError::ConfigLoad {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap an I/O failure on a specific path
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjectsError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectsError>;
