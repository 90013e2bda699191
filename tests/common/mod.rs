#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use check_license::header::HeaderTemplate;

/// A body that follows the header in fixture files.
pub const BODY: &str = "#include <cmath>\n\nint main() {}\n";

/// Returns the literal header for `year`.
pub fn header(year: i32) -> Result<String> {
  Ok(HeaderTemplate::for_year(year)?.literal().to_string())
}

/// Writes a file starting with a valid header for `year`.
pub fn write_compliant(path: &Path, year: i32) -> Result<()> {
  write_file(path, &format!("{}\n\n{}", header(year)?, BODY))
}

/// Writes `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

/// Builds a command for the binary with config discovery and colors off.
pub fn check_license(dir: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("check-license")?;
  cmd
    .current_dir(dir)
    .env_remove("CHECK_LICENSE_CONFIG")
    .env_remove("RUST_LOG")
    .arg("--colors=never");
  Ok(cmd)
}

/// Joins `parts` below `root`.
pub fn path_in(root: &Path, parts: &[&str]) -> PathBuf {
  parts.iter().fold(root.to_path_buf(), |path, part| path.join(part))
}
