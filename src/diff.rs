//! # Diff Module
//!
//! Renders the difference between a file's leading comment block and the
//! expected header as a unified diff. Years are normalized on both sides
//! before diffing so only structural differences show.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::TextDiff;

/// Label of the expected side in rendered diffs.
pub const EXPECTED_LABEL: &str = "expected header";

/// Manages diff rendering for header violations.
///
/// Diffs are always printed to stderr and optionally appended to a file.
#[derive(Debug, Default)]
pub struct DiffManager {
  /// Path to save all diffs of a run to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  /// Creates a new DiffManager.
  pub const fn new(save_diff_path: Option<PathBuf>) -> Self {
    Self { save_diff_path }
  }

  /// Truncates the save file so each run starts with an empty diff file.
  pub fn init(&self) -> Result<()> {
    if let Some(ref path) = self.save_diff_path {
      File::create(path).with_context(|| format!("Failed to create diff file {}", path.display()))?;
    }
    Ok(())
  }

  /// Renders a unified diff turning `actual` lines into `expected` lines.
  ///
  /// Lines must end with `\n`. Lines only in `expected` show as additions.
  pub fn render(path: &Path, actual: &[String], expected: &[String]) -> String {
    let actual = actual.concat();
    let expected = expected.concat();
    let path = path.display().to_string();

    let diff = TextDiff::from_lines(actual.as_str(), expected.as_str());
    diff
      .unified_diff()
      .context_radius(3)
      .header(&path, EXPECTED_LABEL)
      .to_string()
  }

  /// Prints `diff` to stderr and appends it to the save file if configured.
  pub fn display_diff(&self, diff: &str) -> Result<()> {
    for line in diff.lines() {
      eprintln!("{}", colorize_line(line));
    }
    eprintln!();

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file {}", diff_path.display()))?;
      writeln!(file, "{diff}").with_context(|| format!("Failed to write diff file {}", diff_path.display()))?;
    }

    Ok(())
  }
}

fn colorize_line(line: &str) -> String {
  if line.starts_with("+++") || line.starts_with("---") {
    line.if_supports_color(Stream::Stderr, |l| l.bold()).to_string()
  } else if line.starts_with('+') {
    line.if_supports_color(Stream::Stderr, |l| l.green()).to_string()
  } else if line.starts_with('-') {
    line.if_supports_color(Stream::Stderr, |l| l.red()).to_string()
  } else if line.starts_with("@@") {
    line.if_supports_color(Stream::Stderr, |l| l.cyan()).to_string()
  } else {
    line.to_string()
  }
}
