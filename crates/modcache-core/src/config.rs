use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name probed in each ancestor directory when no override is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "tsconfig.json";

/// Settings for one resolve session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Configuration used for files with no enclosing config of their own.
    pub project_config: PathBuf,

    /// Name of the configuration file looked up in each ancestor directory.
    pub config_file_name: String,

    /// Whether file names are case sensitive on the host filesystem.
    pub case_sensitive: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            project_config: PathBuf::from(DEFAULT_CONFIG_FILE_NAME),
            config_file_name: DEFAULT_CONFIG_FILE_NAME.to_string(),
            case_sensitive: !cfg!(any(windows, target_os = "macos")),
        }
    }
}

impl SessionConfig {
    /// Create a config rooted at the given project configuration file.
    #[must_use]
    pub fn new(project_config: impl Into<PathBuf>) -> Self {
        Self {
            project_config: project_config.into(),
            ..Default::default()
        }
    }

    /// Set the configuration file name to look for.
    #[must_use]
    pub fn with_config_file_name(mut self, name: impl Into<String>) -> Self {
        self.config_file_name = name.into();
        self
    }

    /// Set filesystem case sensitivity.
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = SessionConfig::new("/repo/tsconfig.json")
            .with_config_file_name("jsconfig.json")
            .with_case_sensitive(false);

        assert_eq!(config.project_config, PathBuf::from("/repo/tsconfig.json"));
        assert_eq!(config.config_file_name, "jsconfig.json");
        assert!(!config.case_sensitive);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"project_config": "/repo/tsconfig.json"}"#).unwrap();

        assert_eq!(config.project_config, PathBuf::from("/repo/tsconfig.json"));
        assert_eq!(config.config_file_name, DEFAULT_CONFIG_FILE_NAME);
    }
}
