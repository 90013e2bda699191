//! # Report Module
//!
//! Per-file results of a run, the aggregated summary, and the optional JSON
//! report written with `--report-json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

/// Outcome of checking a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
  /// The file starts with a valid header
  Compliant,
  /// The header is missing or malformed
  Invalid,
  /// The header was missing or malformed and has been prepended
  Fixed,
}

/// Information about a checked file for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(serialize_with = "serialize_path")]
  pub path: PathBuf,
  /// Result of the check
  pub status: FileStatus,
}

impl FileReport {
  /// Creates a report for `path`.
  pub fn new(path: impl Into<PathBuf>, status: FileStatus) -> Self {
    Self {
      path: path.into(),
      status,
    }
  }

  /// Returns `true` unless the file was compliant. Fixed files still count.
  pub const fn is_violation(&self) -> bool {
    !matches!(self.status, FileStatus::Compliant)
  }
}

/// Serializes a path as a plain string, replacing invalid UTF-8.
fn serialize_path<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
  S: serde::Serializer,
{
  serializer.serialize_str(&path.to_string_lossy())
}

/// Aggregated counts for a run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
  /// Total number of files checked
  pub total_files: usize,
  /// Files with a valid header
  pub compliant: usize,
  /// Files reported but left untouched
  pub invalid: usize,
  /// Files that had the header prepended
  pub fixed: usize,
  /// Total processing time
  #[serde(skip_serializing)]
  pub processing_time: Duration,
  /// Processing time in seconds for serialization
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
  /// Timestamp when the summary was created
  pub timestamp: i64,
}

impl ProcessingSummary {
  /// Counts the statuses in `files`.
  pub fn from_reports(files: &[FileReport], processing_time: Duration) -> Self {
    let count = |status: FileStatus| files.iter().filter(|file| file.status == status).count();

    Self {
      total_files: files.len(),
      compliant: count(FileStatus::Compliant),
      invalid: count(FileStatus::Invalid),
      fixed: count(FileStatus::Fixed),
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
      timestamp: Local::now().timestamp(),
    }
  }

  /// Number of files whose header did not match, fixed or not.
  pub const fn violations(&self) -> usize {
    self.invalid + self.fixed
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ProcessingSummary,
  files: &'a [FileReport],
}

/// Writes a JSON report to `output_path`.
///
/// # Errors
///
/// Returns an error if serialization or writing the file fails.
pub fn write_json_report(output_path: &Path, files: &[FileReport], summary: &ProcessingSummary) -> Result<()> {
  let content = serde_json::to_string_pretty(&JsonReport { summary, files }).context("Failed to serialize report")?;

  fs::write(output_path, content).with_context(|| format!("Failed to write report to {}", output_path.display()))
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  fn reports() -> Vec<FileReport> {
    vec![
      FileReport::new("Core/src/A.cpp", FileStatus::Compliant),
      FileReport::new("Core/src/B.cpp", FileStatus::Invalid),
      FileReport::new("Core/src/C.hpp", FileStatus::Fixed),
      FileReport::new("Core/src/D.ipp", FileStatus::Compliant),
    ]
  }

  #[test]
  fn test_summary_counts() {
    let summary = ProcessingSummary::from_reports(&reports(), Duration::from_millis(1500));

    assert_eq!(summary.total_files, 4);
    assert_eq!(summary.compliant, 2);
    assert_eq!(summary.invalid, 1);
    assert_eq!(summary.fixed, 1);
    assert_eq!(summary.violations(), 2);
    assert!((summary.processing_time_secs - 1.5).abs() < f64::EPSILON);
  }

  #[test]
  fn test_fixed_counts_as_violation() {
    assert!(!FileReport::new("a.cpp", FileStatus::Compliant).is_violation());
    assert!(FileReport::new("a.cpp", FileStatus::Invalid).is_violation());
    assert!(FileReport::new("a.cpp", FileStatus::Fixed).is_violation());
  }

  #[test]
  fn test_json_report() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = temp_dir.path().join("report.json");
    let files = reports();
    let summary = ProcessingSummary::from_reports(&files, Duration::from_secs(0));

    write_json_report(&output, &files, &summary).expect("report written");

    let value: serde_json::Value =
      serde_json::from_str(&fs::read_to_string(&output).expect("read report")).expect("valid json");
    assert_eq!(value["summary"]["total_files"], 4);
    assert_eq!(value["summary"]["invalid"], 1);
    assert_eq!(value["files"][1]["path"], "Core/src/B.cpp");
    assert_eq!(value["files"][1]["status"], "invalid");
    assert_eq!(value["files"][2]["status"], "fixed");
    assert!(value["summary"].get("processing_time").is_none());
  }
}
