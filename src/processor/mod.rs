//! # Processor Module
//!
//! This module checks each target file for the license header, reports
//! violations with a diff, and in fix mode prepends the header.
//!
//! Files are processed one at a time in the order they were collected. A
//! violation is recorded and processing continues; any I/O error aborts the
//! run.

pub mod file_collector;
pub mod file_io;

use std::fs::OpenOptions;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub use file_collector::FileCollector;
pub use file_io::{prepend_header, read_license_block};
use tracing::debug;

use crate::diff::DiffManager;
use crate::error::CheckError;
use crate::header::HeaderTemplate;
use crate::output::{print_fixing, print_violation};
use crate::report::{FileReport, FileStatus};
use crate::verbose_log;

/// Checks files against a [`HeaderTemplate`].
///
/// # Examples
///
/// ```rust,no_run
/// use check_license::diff::DiffManager;
/// use check_license::header::HeaderTemplate;
/// use check_license::processor::Processor;
///
/// # fn main() -> anyhow::Result<()> {
/// let processor = Processor::new(HeaderTemplate::for_year(2024)?, false, DiffManager::default());
/// let reports = processor.process(&["Core/src/Vertex.cpp".into()])?;
/// let failed = reports.iter().any(|report| report.is_violation());
/// # Ok(())
/// # }
/// ```
pub struct Processor {
  header: HeaderTemplate,
  fix: bool,
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a processor; with `fix` set, non-compliant files are rewritten.
  pub const fn new(header: HeaderTemplate, fix: bool, diff_manager: DiffManager) -> Self {
    Self {
      header,
      fix,
      diff_manager,
    }
  }

  /// The header files are checked against.
  pub const fn header(&self) -> &HeaderTemplate {
    &self.header
  }

  /// Checks every file in order and returns one report per file.
  ///
  /// # Errors
  ///
  /// Stops at the first file that cannot be opened, read or written.
  pub fn process(&self, files: &[PathBuf]) -> Result<Vec<FileReport>, CheckError> {
    files.iter().map(|path| self.process_file(path)).collect()
  }

  /// Checks a single file, reporting and optionally fixing a violation.
  ///
  /// The file handle lives only for the duration of this call.
  pub fn process_file(&self, path: &Path) -> Result<FileReport, CheckError> {
    verbose_log!("Checking file: {}", path.display());

    let mut file = OpenOptions::new()
      .read(true)
      .write(self.fix)
      .open(path)
      .map_err(CheckError::io("open", path))?;

    let block = {
      let mut reader = BufReader::new(&mut file);
      read_license_block(&mut reader, self.header.line_count()).map_err(CheckError::io("read", path))?
    };

    if self.header.matches(&block) {
      debug!("Valid header in {}", path.display());
      return Ok(FileReport::new(path, FileStatus::Compliant));
    }

    print_violation(path);
    let diff = DiffManager::render(
      path,
      &self.header.normalize_lines(&block),
      self.header.normalized_lines(),
    );
    if let Err(e) = self.diff_manager.display_diff(&diff) {
      eprintln!("Error saving diff: {e:#}");
    }

    if !self.fix {
      return Ok(FileReport::new(path, FileStatus::Invalid));
    }

    print_fixing();
    prepend_header(&mut file, self.header.literal()).map_err(CheckError::io("write", path))?;
    debug!("Prepended header to {}", path.display());

    Ok(FileReport::new(path, FileStatus::Fixed))
  }
}
