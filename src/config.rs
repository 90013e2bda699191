//! # Configuration Module
//!
//! Optional settings for check-license, read from a `.check-license.toml`
//! file or the file named by the `CHECK_LICENSE_CONFIG` environment variable.
//!
//! ```toml
//! ignore = ["build/**", "Examples/Python/**"]
//!
//! [extensions]
//! include = ["cpp", "hpp", "ipp"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".check-license.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "CHECK_LICENSE_CONFIG";

/// Extensions checked when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["cpp", "hpp", "ipp"];

/// Extension selection for directory inputs.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct ExtensionConfig {
  /// If specified, replaces [`DEFAULT_EXTENSIONS`].
  #[serde(default)]
  pub include: Option<Vec<String>>,
}

/// Main configuration struct.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
  /// Glob patterns for files to skip, relative to the input directory.
  #[serde(default)]
  pub ignore: Vec<String>,

  /// Extension-based file selection.
  #[serde(default)]
  pub extensions: ExtensionConfig,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// An extension entry is invalid.
  #[error("Invalid extension '{extension}': {message}")]
  InvalidExtension { extension: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if an
  /// extension entry is malformed.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    debug!(
      "Loaded config with {} ignore patterns and {} extensions",
      config.ignore.len(),
      config.extensions.include.as_ref().map_or(0, Vec::len)
    );

    Ok(config.normalize())
  }

  /// Checks that extension entries are non-empty and have no leading dot.
  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(ref include) = self.extensions.include {
      for ext in include {
        if ext.is_empty() {
          return Err(ConfigError::InvalidExtension {
            extension: ext.clone(),
            message: "extension cannot be empty".to_string(),
          });
        }
        if ext.starts_with('.') {
          return Err(ConfigError::InvalidExtension {
            extension: ext.clone(),
            message: "extension should not include leading dot".to_string(),
          });
        }
      }
    }
    Ok(())
  }

  /// Lowercases extensions for case-insensitive matching.
  fn normalize(self) -> Self {
    let include = self
      .extensions
      .include
      .map(|exts| exts.into_iter().map(|ext| ext.to_lowercase()).collect());

    Self {
      ignore: self.ignore,
      extensions: ExtensionConfig { include },
    }
  }

  /// Applies command line overrides.
  ///
  /// CLI extensions replace the configured set; CLI ignore patterns are
  /// appended to the configured ones.
  pub fn merge_cli(&mut self, include_ext: Vec<String>, ignore: Vec<String>) {
    if !include_ext.is_empty() {
      let include = include_ext
        .into_iter()
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .collect();
      self.extensions.include = Some(include);
    }
    self.ignore.extend(ignore);
  }

  /// The extensions to check, falling back to [`DEFAULT_EXTENSIONS`].
  pub fn extensions(&self) -> Vec<String> {
    match self.extensions.include {
      Some(ref include) => include.clone(),
      None => DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
    }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `CHECK_LICENSE_CONFIG` environment variable
/// 3. `.check-license.toml` in `search_dir`
pub fn discover_config_path(explicit_path: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let local_config = search_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    verbose_log!("Using config: {}", local_config.display());
    return Some(local_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path, or return the default.
///
/// An explicit `--config` path that does not exist is an error; a missing
/// discovered file is not.
pub fn load_config(explicit_path: Option<&Path>, search_dir: &Path, no_config: bool) -> Result<Config> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(Config::default());
  }

  match discover_config_path(explicit_path, search_dir) {
    Some(path) => Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display())),
    None => Ok(Config::default()),
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_valid_config() {
    let config_content = concat!(
      "ignore = [\"build/**\"]\n",
      "\n",
      "[extensions]\n",
      "include = [\"cpp\", \"H\"]\n",
    );

    let config: Config = toml::from_str(config_content).expect("valid config should parse");

    assert_eq!(config.ignore, vec!["build/**".to_string()]);
    assert_eq!(
      config.extensions.include,
      Some(vec!["cpp".to_string(), "H".to_string()])
    );
  }

  #[test]
  fn test_parse_empty_config() {
    let config: Config = toml::from_str("").expect("empty config should parse");
    assert_eq!(config, Config::default());
    assert_eq!(config.extensions(), vec!["cpp", "hpp", "ipp"]);
  }

  #[test]
  fn test_validate_leading_dot() {
    let config = Config {
      ignore: Vec::new(),
      extensions: ExtensionConfig {
        include: Some(vec![".cpp".to_string()]),
      },
    };

    let err = config.validate().expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidExtension { .. }));
  }

  #[test]
  fn test_load_normalizes_case() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&path, "[extensions]\ninclude = [\"CPP\", \"Hpp\"]\n").expect("write config");

    let config = Config::load(&path).expect("config should load");
    assert_eq!(config.extensions(), vec!["cpp", "hpp"]);
  }

  #[test]
  fn test_load_invalid_toml() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&path, "ignore = [").expect("write config");

    let err = Config::load(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
  }

  #[test]
  fn test_merge_cli() {
    let mut config = Config {
      ignore: vec!["build/**".to_string()],
      extensions: ExtensionConfig::default(),
    };

    config.merge_cli(vec![".H".to_string(), "cxx".to_string()], vec!["*.ipp".to_string()]);

    assert_eq!(config.extensions(), vec!["h", "cxx"]);
    assert_eq!(config.ignore, vec!["build/**".to_string(), "*.ipp".to_string()]);
  }

  #[test]
  fn test_discover_in_search_dir() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&path, "").expect("write config");

    let explicit = temp_dir.path().join("other.toml");
    assert_eq!(discover_config_path(Some(&explicit), temp_dir.path()), Some(explicit));

    let loaded = load_config(None, temp_dir.path(), true).expect("no-config should load defaults");
    assert_eq!(loaded, Config::default());
  }
}
