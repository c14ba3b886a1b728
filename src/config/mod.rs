//! Configuration file for ~/.config/crmdash/config.toml.
//!
//! The file is optional. A missing or empty file yields `Config::default()`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::nav::{builtin_overrides, ExpandOverride};
use crate::theme::ThemeVariant;

const APP_NAME: &str = "crmdash";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Route shown at startup. Also seeds the sidebar expansion.
    pub initial_path: String,
    pub theme: ThemeVariant,
    pub brand: String,
    pub user_name: String,
    pub user_role: String,
    pub sidebar_width: u16,
    pub tick_rate_ms: u64,
    /// Extra entries appended to the built-in override table.
    pub expand_overrides: Vec<ExpandOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_path: "/crm".to_string(),
            theme: ThemeVariant::Light,
            brand: "VELZON".to_string(),
            user_name: "Anna Adame".to_string(),
            user_role: "Founder".to_string(),
            sidebar_width: 30,
            tick_rate_ms: 250,
            expand_overrides: Vec::new(),
        }
    }
}

impl Config {
    /// Built-in overrides followed by the configured ones. Configured rules
    /// whose prefix is not an absolute route are dropped.
    pub fn overrides(&self) -> Vec<ExpandOverride> {
        let mut rules = builtin_overrides();
        for rule in &self.expand_overrides {
            if rule.has_valid_prefix() {
                rules.push(rule.clone());
            } else {
                tracing::warn!(
                    prefix = %rule.prefix,
                    key = %rule.key,
                    "ignoring expand override without an absolute prefix"
                );
            }
        }
        rules
    }
}

/// Reads `path`. A missing file is not an error.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(err) => return Err(ConfigError::Io(err)),
    };
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = toml::from_str(&content)?;
    tracing::info!(
        path = %path.display(),
        initial_path = %config.initial_path,
        overrides = config.expand_overrides.len(),
        "loaded configuration"
    );
    Ok(config)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CRMDASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_NAME).join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join(APP_NAME).join("config.toml"));
    }

    directories::ProjectDirs::from("io", APP_NAME, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_NAME));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join(APP_NAME));
    }
    directories::ProjectDirs::from("io", APP_NAME, APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("crmdash.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("crmdash_config_{name}"));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("crmdash_config_missing/none.toml");
        assert_eq!(load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let path = write_config("empty", "  \n");
        assert_eq!(load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = write_config(
            "partial",
            r#"
initial_path = "/analytics"
theme = "dark"

[[expand_overrides]]
prefix = "/reports"
key = "dashboards"
"#,
        );
        let config = load(&path).unwrap();
        assert_eq!(config.initial_path, "/analytics");
        assert_eq!(config.theme, ThemeVariant::Dark);
        assert_eq!(config.brand, "VELZON");
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(
            config.expand_overrides,
            vec![ExpandOverride::new("/reports", "dashboards")]
        );
    }

    #[test]
    fn test_config_overrides_extend_builtin_table() {
        let config = Config {
            expand_overrides: vec![ExpandOverride::new("/reports", "dashboards")],
            ..Config::default()
        };
        let rules = config.overrides();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], ExpandOverride::new("/crm", "dashboards"));
        assert_eq!(rules[1].prefix, "/reports");
    }

    #[test]
    fn test_config_overrides_drop_empty_and_relative_prefixes() {
        let config = Config {
            expand_overrides: vec![
                ExpandOverride::new("", "dashboards"),
                ExpandOverride::new("reports", "dashboards"),
                ExpandOverride::new("/reports", "dashboards"),
            ],
            ..Config::default()
        };
        let prefixes: Vec<String> = config.overrides().into_iter().map(|rule| rule.prefix).collect();
        assert_eq!(prefixes, vec!["/crm".to_string(), "/reports".to_string()]);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let path = write_config("invalid", "this is not [valid toml");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let path = write_config("bad_theme", "theme = \"sepia\"");
        assert!(matches!(load(&path), Err(ConfigError::Parse(_))));
    }
}
