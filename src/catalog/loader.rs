use super::types::{ColorRange, ColorSpec, ProjectType, RawColor, RawProjectType, Rgb};
use super::Catalog;
use crate::{ProjectsError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Definition file compiled into the binary
pub const BUNDLED_CATALOG: &str = include_str!("../../assets/project_types.json");

/// Environment variable naming an alternative definition file
pub const CATALOG_ENV_VAR: &str = "PROJECTS_DIRECTORY_CATALOG";

const BUNDLED_ORIGIN: &str = "bundled catalog";

/// Serialization format of a definition file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => CatalogFormat::Yaml,
            _ => CatalogFormat::Json,
        }
    }
}

/// Loads the project type catalog from the bundled file or an override
#[derive(Debug, Default)]
pub struct CatalogLoader {
    override_path: Option<PathBuf>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit definition file instead of the bundled one
    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.override_path = path;
        }
        self
    }

    /// Fall back to `PROJECTS_DIRECTORY_CATALOG` when no path was given
    pub fn with_env_override(mut self) -> Self {
        if self.override_path.is_none() {
            self.override_path = std::env::var_os(CATALOG_ENV_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from);
        }
        self
    }

    pub fn override_path(&self) -> Option<&Path> {
        self.override_path.as_deref()
    }

    pub fn load(&self) -> Result<Catalog> {
        match &self.override_path {
            Some(path) => {
                let origin = path.display().to_string();
                debug!(path = %origin, "Loading project types from file");
                let contents = std::fs::read_to_string(path)
                    .map_err(|e| ProjectsError::config_load(&origin, e))?;
                parse_catalog(&contents, CatalogFormat::from_path(path), &origin)
            }
            None => {
                debug!("Loading bundled project types");
                parse_catalog(BUNDLED_CATALOG, CatalogFormat::Json, BUNDLED_ORIGIN)
            }
        }
    }
}

/// Load the catalog from `path`, then the environment override, then the
/// bundled file
pub fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    CatalogLoader::new().with_path(path).with_env_override().load()
}

/// Parse and validate definition file contents
pub fn parse_catalog(contents: &str, format: CatalogFormat, origin: &str) -> Result<Catalog> {
    let entries: serde_json::Map<String, serde_json::Value> = match format {
        CatalogFormat::Json => {
            serde_json::from_str(contents).map_err(|e| ProjectsError::config_load(origin, e))?
        }
        CatalogFormat::Yaml => {
            serde_yaml_ng::from_str(contents).map_err(|e| ProjectsError::config_load(origin, e))?
        }
    };

    if entries.is_empty() {
        return Err(ProjectsError::config_load(origin, "no project types defined"));
    }

    let mut types: Vec<ProjectType> = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let raw: RawProjectType = serde_json::from_value(value)
            .map_err(|e| ProjectsError::config_load(origin, format!("entry '{}': {}", key, e)))?;
        let project_type = build_project_type(&key, raw)
            .map_err(|reason| ProjectsError::config_load(origin, format!("entry '{}': {}", key, reason)))?;

        if let Some(clash) = types
            .iter()
            .find(|t| t.identifier.eq_ignore_ascii_case(&project_type.identifier))
        {
            return Err(ProjectsError::config_load(
                origin,
                format!(
                    "duplicate project type name '{}' (already used by '{}')",
                    project_type.identifier, clash.key
                ),
            ));
        }
        if let Some(clash) = types.iter().find(|t| shares_answer_name(t, &project_type)) {
            return Err(ProjectsError::config_load(
                origin,
                format!("entries '{}' and '{}' answer to the same name", clash.key, key),
            ));
        }
        types.push(project_type);
    }

    debug!(count = types.len(), origin, "Loaded project types");
    Ok(Catalog::new(types))
}

fn build_project_type(key: &str, raw: RawProjectType) -> std::result::Result<ProjectType, String> {
    validate_identifier(&raw.name)?;

    let label = raw
        .label
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| raw.name.clone());

    let color = match raw.color {
        None => ColorSpec::Plain,
        Some(RawColor::Single(hex)) => ColorSpec::Single(hex.parse::<Rgb>()?),
        Some(RawColor::Ranges(ranges)) => {
            let label_len = label.chars().count();
            let mut parsed = Vec::with_capacity(ranges.len());
            for (hex, start, end) in ranges {
                if start > end {
                    return Err(format!("color range {}..={} is reversed", start, end));
                }
                if start >= label_len {
                    return Err(format!(
                        "color range {}..={} starts past the end of '{}'",
                        start, end, label
                    ));
                }
                parsed.push(ColorRange {
                    color: hex.parse::<Rgb>()?,
                    start,
                    end,
                });
            }
            ColorSpec::Ranges(parsed)
        }
    };

    Ok(ProjectType {
        key: key.to_string(),
        identifier: raw.name,
        label,
        description: raw.description.unwrap_or_default(),
        color,
    })
}

/// Answers match name, label or key ignoring case, so those must not overlap
/// between two entries
fn shares_answer_name(a: &ProjectType, b: &ProjectType) -> bool {
    let names = |t: &ProjectType| [t.identifier.clone(), t.label.clone(), t.key.clone()];
    names(a)
        .iter()
        .any(|x| names(b).iter().any(|y| x.eq_ignore_ascii_case(y)))
}

/// A project type name must be usable as exactly one folder name
fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name != name.trim() {
        return Err(format!("name '{}' has surrounding whitespace", name));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(format!("name '{}' must not contain path separators", name));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(format!("name '{}' is not a plain folder name", name)),
    }
}
