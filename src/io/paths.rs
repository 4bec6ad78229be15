use directories::BaseDirs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Turn a typed path answer into a filesystem path.
///
/// Blank answers resolve to `default`. A leading `~` is expanded to the
/// home directory when one can be determined.
pub fn resolve_base_path(answer: &str, default: &Path) -> PathBuf {
    let answer = answer.trim();
    if answer.is_empty() {
        return default.to_path_buf();
    }
    expand_tilde(answer)
}

/// Expand `~` and `~/...` (or `~\...`) using the home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(path),
    };

    match BaseDirs::new() {
        Some(dirs) => {
            let home = dirs.home_dir();
            let rest = rest.trim_start_matches(['/', '\\']);
            if rest.is_empty() {
                home.to_path_buf()
            } else {
                home.join(rest)
            }
        }
        None => {
            warn!(path, "Could not determine home directory, using path as typed");
            PathBuf::from(path)
        }
    }
}

/// Current working directory, falling back to `.`
pub fn current_dir_or_dot() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Path as shown in prompts and status lines
pub fn display_path(path: &Path) -> String {
    path.display().to_string()
}
