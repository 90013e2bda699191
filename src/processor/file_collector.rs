//! # File Collector Module
//!
//! Turns the input path into the ordered list of files to check.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::CheckError;
use crate::file_filter::FileFilter;

/// Collects the files to check under an input path.
pub struct FileCollector<F> {
  filter: F,
}

impl<F: FileFilter> FileCollector<F> {
  /// Creates a collector applying `filter` to files found in directories.
  pub const fn new(filter: F) -> Self {
    Self { filter }
  }

  /// Resolves `input` into the list of files to check.
  ///
  /// A file input is returned as-is without filtering. A directory input is
  /// walked recursively; siblings are visited in file name order.
  ///
  /// # Errors
  ///
  /// Returns [`CheckError::MissingInput`] if `input` does not exist and
  /// [`CheckError::Enumeration`] if any directory entry cannot be read.
  pub fn collect(&self, input: &Path) -> Result<Vec<PathBuf>, CheckError> {
    if !input.exists() {
      return Err(CheckError::MissingInput(input.to_path_buf()));
    }

    if !input.is_dir() {
      return Ok(vec![input.to_path_buf()]);
    }

    self.traverse_directory(input)
  }

  fn traverse_directory(&self, dir: &Path) -> Result<Vec<PathBuf>, CheckError> {
    debug!("Scanning directory: {}", dir.display());
    let start_time = Instant::now();

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
      let entry = entry.map_err(|source| CheckError::Enumeration {
        path: dir.to_path_buf(),
        source,
      })?;

      // Symlinks count when their target is a regular file.
      if !entry.path().is_file() {
        continue;
      }

      let result = self.filter.should_process(entry.path());
      if result.should_process {
        files.push(entry.into_path());
      } else if let Some(reason) = result.reason {
        tracing::trace!("Skipping {}: {}", entry.path().display(), reason);
      }
    }

    debug!("Found {} files in {}ms", files.len(), start_time.elapsed().as_millis());

    Ok(files)
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;
  use crate::file_filter::ExtensionFilter;

  fn collector() -> FileCollector<ExtensionFilter> {
    let exts = ["cpp", "hpp", "ipp"].map(String::from);
    FileCollector::new(ExtensionFilter::new(&exts))
  }

  #[test]
  fn test_collects_matching_files_recursively() {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = temp_dir.path();
    fs::create_dir_all(root.join("Core/include/Acts")).expect("mkdir");
    fs::write(root.join("Core/src.cpp"), "").expect("write");
    fs::write(root.join("Core/include/Acts/A.hpp"), "").expect("write");
    fs::write(root.join("Core/include/Acts/A.IPP"), "").expect("write");
    fs::write(root.join("CMakeLists.txt"), "").expect("write");
    fs::write(root.join("build.sh"), "").expect("write");

    let files = collector().collect(root).expect("collect");
    let names: Vec<_> = files
      .iter()
      .map(|p| p.strip_prefix(root).expect("under root").to_string_lossy().replace('\\', "/"))
      .collect();

    assert_eq!(names, vec!["Core/include/Acts/A.IPP", "Core/include/Acts/A.hpp", "Core/src.cpp"]);
  }

  #[test]
  fn test_single_file_is_returned_unfiltered() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, "").expect("write");

    assert_eq!(collector().collect(&path).expect("collect"), vec![path]);
  }

  #[cfg(unix)]
  #[test]
  fn test_symlinked_sources_are_collected() {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = temp_dir.path();
    fs::write(root.join("target.txt"), "int main() {}\n").expect("write");
    std::os::unix::fs::symlink(root.join("target.txt"), root.join("Linked.cpp")).expect("symlink");
    std::os::unix::fs::symlink(root.join("missing.txt"), root.join("Dangling.cpp")).expect("symlink");

    assert_eq!(collector().collect(root).expect("collect"), vec![root.join("Linked.cpp")]);
  }

  #[cfg(unix)]
  #[test]
  fn test_unreadable_directory_is_an_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("temp dir");
    let locked = temp_dir.path().join("locked");
    fs::create_dir(&locked).expect("mkdir");
    fs::write(locked.join("A.cpp"), "").expect("write");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");

    // Root ignores directory permissions, so there is nothing to observe.
    let readable = fs::read_dir(&locked).is_ok();
    let result = collector().collect(temp_dir.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");
    if readable {
      return;
    }

    let err = result.expect_err("should fail");
    assert!(matches!(err, CheckError::Enumeration { .. }));
  }

  #[test]
  fn test_missing_input_is_an_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let err = collector()
      .collect(&temp_dir.path().join("does-not-exist"))
      .expect_err("should fail");
    assert!(matches!(err, CheckError::MissingInput(_)));
  }
}
