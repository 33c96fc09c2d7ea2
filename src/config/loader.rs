//! Rules configuration discovery and loading.
//!
//! An explicit path in `INVLINT_CONFIG` wins; otherwise `.invlint.yml` in
//! the project root is used when present; otherwise built-in defaults.

use crate::config::schema::InvlintConfig;
use crate::config::validator::validate;
use crate::error::{InvlintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit rules file.
pub const CONFIG_ENV_VAR: &str = "INVLINT_CONFIG";

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".invlint.yml";

/// Paths to candidate configuration files.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Explicit file from `INVLINT_CONFIG` (need not exist yet)
    pub explicit: Option<PathBuf>,

    /// Project config: .invlint.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let explicit = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::with_explicit(project_root, explicit)
    }

    /// Discover with an explicit override instead of reading the environment.
    pub fn with_explicit(project_root: &Path, explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            project: Self::find_project_config(project_root),
        }
    }

    /// Find project config at .invlint.yml
    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    /// The file that will be loaded, if any.
    pub fn selected(&self) -> Option<&Path> {
        self.explicit.as_deref().or(self.project.as_deref())
    }
}

/// Load a single config file and parse it into InvlintConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<InvlintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InvlintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InvlintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into InvlintConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<InvlintConfig> {
    if content.trim().is_empty() {
        return Ok(InvlintConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| InvlintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the effective rules configuration for a project.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `INVLINT_CONFIG` names a missing file, and
/// `ConfigParseError` or `ConfigValidationError` for unusable content.
pub fn load_config(project_root: &Path) -> Result<InvlintConfig> {
    load_from_paths(&ConfigPaths::discover(project_root))
}

/// Load the rules configuration selected by `paths`.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<InvlintConfig> {
    let config = match paths.selected() {
        Some(path) => {
            tracing::debug!("Loading rules config from {}", path.display());
            load_config_file(path)?
        }
        None => {
            tracing::debug!("No rules config found, using built-in rules");
            InvlintConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discovers_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "min_password_length: 10").unwrap();

        let paths = ConfigPaths::with_explicit(temp.path(), None);

        assert!(paths.project.is_some());
        assert_eq!(
            paths.selected(),
            Some(temp.path().join(CONFIG_FILE_NAME).as_path())
        );
    }

    #[test]
    fn explicit_path_wins_over_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();
        let explicit = temp.path().join("custom.yml");

        let paths = ConfigPaths::with_explicit(temp.path(), Some(explicit.clone()));

        assert_eq!(paths.selected(), Some(explicit.as_path()));
    }

    #[test]
    fn no_config_uses_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_from_paths(&ConfigPaths::with_explicit(temp.path(), None)).unwrap();

        assert_eq!(config, InvlintConfig::default());
    }

    #[test]
    fn loads_project_overrides() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "required_groups: [web]\nmin_password_length: 12\n",
        )
        .unwrap();

        let config = load_from_paths(&ConfigPaths::with_explicit(temp.path(), None)).unwrap();

        assert_eq!(config.required_groups, vec!["web"]);
        assert_eq!(config.min_password_length, 12);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "\n").unwrap();

        let config = load_from_paths(&ConfigPaths::with_explicit(temp.path(), None)).unwrap();

        assert_eq!(config, InvlintConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_explicit(temp.path(), Some(temp.path().join("nope.yml")));

        let err = load_from_paths(&paths).unwrap_err();

        assert!(matches!(err, InvlintError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "required_groups: [unclosed").unwrap();

        let err = load_from_paths(&ConfigPaths::with_explicit(temp.path(), None)).unwrap_err();

        assert!(matches!(err, InvlintError::ConfigParseError { .. }));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "min_password_length: 0").unwrap();

        let err = load_from_paths(&ConfigPaths::with_explicit(temp.path(), None)).unwrap_err();

        assert!(matches!(err, InvlintError::ConfigValidationError { .. }));
    }
}
