//! # Error Module
//!
//! Typed errors for the checker. Compliance violations are not errors; they
//! are recorded in [`FileReport`](crate::report::FileReport)s. Everything in
//! [`CheckError`] aborts the run.

use std::path::PathBuf;

/// A fatal error that stops the whole run.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
  /// The input path given on the command line does not exist.
  #[error("Input path '{}' does not exist", .0.display())]
  MissingInput(PathBuf),

  /// Walking the input directory failed.
  #[error("Failed to enumerate files under '{}': {source}", path.display())]
  Enumeration { path: PathBuf, source: walkdir::Error },

  /// Opening, reading or writing a checked file failed.
  #[error("Failed to {action} '{}': {source}", path.display())]
  Io {
    action: &'static str,
    path: PathBuf,
    source: std::io::Error,
  },

  /// The header pattern could not be compiled.
  #[error("Invalid header pattern: {0}")]
  Pattern(#[from] regex::Error),

  /// An ignore glob could not be parsed.
  #[error("Invalid ignore pattern '{pattern}': {source}")]
  IgnorePattern { pattern: String, source: glob::PatternError },
}

impl CheckError {
  /// Builds a closure mapping an I/O error on `path` into [`CheckError::Io`].
  pub fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
    let path = path.into();
    move |source| Self::Io { action, path, source }
  }
}
