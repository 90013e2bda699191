//! # File Filter Module
//!
//! This module contains components for selecting which files found under a
//! directory input are checked: by extension and by ignore patterns.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::config::Config;
use crate::error::CheckError;
use crate::verbose_log;

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  /// Creates a new FilterResult indicating the file should be processed.
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  /// Creates a new FilterResult indicating the file should be skipped.
  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that decide whether a file is checked.
pub trait FileFilter {
  /// Determines whether the file at `path` should be processed.
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Keeps files whose extension is in a fixed set, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
  extensions: Vec<String>,
}

impl ExtensionFilter {
  /// Creates a filter accepting `extensions` (without leading dot).
  pub fn new(extensions: &[String]) -> Self {
    Self {
      extensions: extensions.iter().map(|ext| ext.to_lowercase()).collect(),
    }
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .unwrap_or("")
      .to_lowercase();

    if self.extensions.contains(&extension) {
      FilterResult::process()
    } else {
      FilterResult::skip(format!("Extension '{extension}' is not checked"))
    }
  }
}

/// Skips files matching any of a set of glob patterns.
///
/// Patterns are matched against the path relative to `root` and against the
/// bare file name.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
  root: PathBuf,
  patterns: Vec<Pattern>,
}

impl IgnoreFilter {
  /// Compiles `patterns` relative to `root`.
  ///
  /// # Errors
  ///
  /// Returns [`CheckError::IgnorePattern`] for the first invalid glob.
  pub fn from_patterns(root: &Path, patterns: &[String]) -> Result<Self, CheckError> {
    let patterns = patterns
      .iter()
      .map(|pattern| {
        Pattern::new(pattern).map_err(|source| CheckError::IgnorePattern {
          pattern: pattern.clone(),
          source,
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Self {
      root: root.to_path_buf(),
      patterns,
    })
  }

  fn is_ignored(&self, path: &Path) -> bool {
    let options = MatchOptions {
      case_sensitive: true,
      require_literal_separator: true,
      require_literal_leading_dot: false,
    };

    let relative = path.strip_prefix(&self.root).unwrap_or(path);
    let relative = relative.to_string_lossy().replace('\\', "/");
    let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();

    self
      .patterns
      .iter()
      .any(|pattern| pattern.matches_with(&relative, options) || pattern.matches_with(&file_name, options))
  }
}

impl FileFilter for IgnoreFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    if self.is_ignored(path) {
      verbose_log!("Skipping: {} (matches ignore pattern)", path.display());
      FilterResult::skip("Matches ignore pattern")
    } else {
      FilterResult::process()
    }
  }
}

/// Filter that combines multiple filters; the first skip wins.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  /// Creates a new CompositeFilter with the given filters.
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }

  /// Adds a filter to this CompositeFilter.
  pub fn add_filter(&mut self, filter: Box<dyn FileFilter>) {
    self.filters.push(filter);
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Builds the extension and ignore filters for a directory input.
///
/// # Errors
///
/// Returns an error if an ignore pattern is not a valid glob.
pub fn create_default_filter(root: &Path, config: &Config) -> Result<CompositeFilter, CheckError> {
  let mut filter = CompositeFilter::new(vec![Box::new(ExtensionFilter::new(&config.extensions()))]);
  if !config.ignore.is_empty() {
    filter.add_filter(Box::new(IgnoreFilter::from_patterns(root, &config.ignore)?));
  }
  Ok(filter)
}
