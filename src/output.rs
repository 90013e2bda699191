//! # Output Module
//!
//! This module centralizes all user-facing output.
//!
//! Violations go to stderr and are never silenced. Progress messages and the
//! summary go to stdout and respect `--quiet`.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::ProcessingSummary;

/// Symbols used in output
pub mod symbols {
  /// Success/has license
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing license/failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print the message introducing a violation to stderr.
pub fn print_violation(path: &Path) {
  let message = format!("invalid / missing license in {}", display_path(path));
  eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.red()));
}

/// Announce that a file is being fixed. Printed even in quiet mode.
pub fn print_fixing() {
  println!("-> fixing file");
}

/// Print the initial "Checking N files..." message.
pub fn print_start_message(file_count: usize, fix_mode: bool) {
  if is_quiet() {
    return;
  }

  let verb = if fix_mode { "Fixing" } else { "Checking" };
  let files_word = if file_count == 1 { "file" } else { "files" };

  println!("{} {} {}...", verb, file_count, files_word);
}

/// Print the success message when all files have valid headers.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have valid license headers",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the one-line summary of a run.
pub fn print_summary(summary: &ProcessingSummary) {
  if is_quiet() {
    return;
  }

  let violations = summary.violations();
  let violations_str = if violations > 0 {
    format!("{} {}", symbols::FAILURE, violations)
      .if_supports_color(Stream::Stdout, |s| s.red())
      .to_string()
  } else {
    violations.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
  };

  let mut summary_line = format!(
    "Checked {} {}: {} OK, {} invalid, {} fixed",
    summary.total_files,
    if summary.total_files == 1 { "file" } else { "files" },
    summary.compliant.if_supports_color(Stream::Stdout, |s| s.cyan()),
    violations_str,
    summary.fixed,
  );

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Format a path relative to the current directory when possible.
pub fn display_path(path: &Path) -> String {
  let relative = if path.is_absolute() {
    std::env::current_dir()
      .ok()
      .and_then(|cwd| pathdiff::diff_paths(path, cwd))
      .filter(|rel| !rel.starts_with(".."))
  } else {
    None
  };

  relative.as_deref().unwrap_or(path).display().to_string()
}
