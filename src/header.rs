//! # Header Module
//!
//! This module builds the license header every checked file must start with.
//!
//! A [`HeaderTemplate`] is created for one calendar year and provides three
//! views of the same header:
//! - the literal text, written into files in fix mode
//! - an anchored pattern accepting any year from 2000 to 2099
//! - year-normalized lines, used only to render readable diffs
//!
//! ## Example
//!
//! ```rust
//! use check_license::header::HeaderTemplate;
//!
//! # fn main() -> Result<(), check_license::error::CheckError> {
//! let header = HeaderTemplate::for_year(2024)?;
//! assert!(header.literal().contains("Copyright (C) 2024 ACTS project team"));
//!
//! // Any 20xx year is accepted when checking.
//! let older = HeaderTemplate::for_year(2019)?;
//! assert!(header.matches(older.literal()));
//! # Ok(())
//! # }
//! ```

use regex::Regex;

use crate::error::CheckError;

/// Prefix every header line starts with.
pub const COMMENT_MARKER: &str = "//";

/// Replaces year digits in diff output.
pub const YEAR_PLACEHOLDER: &str = "XXXX";

/// Template variable substituted with the copyright year.
const YEAR_FIELD: &str = "{{year}}";

/// Years accepted in the copyright line.
const YEAR_PATTERN: &str = "20[0-9]{2}";

const HEADER_TEMPLATE: &[&str] = &[
  "// This file is part of the ACTS project.",
  "//",
  "// Copyright (C) {{year}} ACTS project team",
  "//",
  "// This Source Code Form is subject to the terms of the Mozilla Public",
  "// License, v. 2.0. If a copy of the MPL was not distributed with this",
  "// file, You can obtain one at http://mozilla.org/MPL/2.0/.",
];

/// The expected license header for a given year.
#[derive(Debug, Clone)]
pub struct HeaderTemplate {
  /// Header text with the real year, no trailing newline
  literal: String,
  /// Anchored pattern the leading comment block must match
  pattern: Regex,
  /// Matches year digits for normalization
  year_re: Regex,
  /// Literal lines with years replaced by [`YEAR_PLACEHOLDER`]
  normalized_lines: Vec<String>,
}

impl HeaderTemplate {
  /// Builds the header for `year`.
  ///
  /// The year is only used for the literal text. Matching accepts any year
  /// of the form `20xx` regardless of the value passed here.
  ///
  /// # Errors
  ///
  /// Returns [`CheckError::Pattern`] if a pattern fails to compile.
  pub fn for_year(year: i32) -> Result<Self, CheckError> {
    let year = year.to_string();
    let literal = HEADER_TEMPLATE
      .iter()
      .map(|line| line.replace(YEAR_FIELD, &year))
      .collect::<Vec<_>>()
      .join("\n");

    let pattern = Regex::new(&build_pattern(HEADER_TEMPLATE))?;
    let year_re = Regex::new(YEAR_PATTERN)?;

    let mut template = Self {
      literal,
      pattern,
      year_re,
      normalized_lines: Vec::new(),
    };
    template.normalized_lines = template.normalize_lines(&template.literal);

    Ok(template)
  }

  /// The header text to insert, without a trailing newline.
  pub fn literal(&self) -> &str {
    &self.literal
  }

  /// Number of lines in the header.
  pub const fn line_count(&self) -> usize {
    HEADER_TEMPLATE.len()
  }

  /// Returns `true` if `block` is exactly a valid header.
  ///
  /// `block` is expected to be trimmed already; the match spans the whole
  /// string.
  pub fn matches(&self, block: &str) -> bool {
    self.pattern.is_match(block)
  }

  /// Expected header lines with normalized years, each ending in `\n`.
  pub fn normalized_lines(&self) -> &[String] {
    &self.normalized_lines
  }

  /// Replaces every `20xx` in `text` with [`YEAR_PLACEHOLDER`].
  pub fn normalize_years(&self, text: &str) -> String {
    self.year_re.replace_all(text, YEAR_PLACEHOLDER).into_owned()
  }

  /// Splits `text` into year-normalized lines, each ending in `\n`.
  ///
  /// An empty block yields no lines.
  pub fn normalize_lines(&self, text: &str) -> Vec<String> {
    if text.is_empty() {
      return Vec::new();
    }

    text
      .split('\n')
      .map(|line| format!("{}\n", self.normalize_years(line)))
      .collect()
  }
}

/// Builds the anchored header pattern with escaped literal text.
fn build_pattern(lines: &[&str]) -> String {
  let body = lines
    .iter()
    .map(|line| {
      line
        .split(YEAR_FIELD)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(YEAR_PATTERN)
    })
    .collect::<Vec<_>>()
    .join("\n");

  format!(r"\A{body}\z")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn header() -> HeaderTemplate {
    HeaderTemplate::for_year(2024).expect("header should build")
  }

  #[test]
  fn test_literal_has_year_and_no_trailing_newline() {
    let header = header();
    assert!(header.literal().starts_with("// This file is part of the ACTS project.\n//\n"));
    assert!(header.literal().contains("// Copyright (C) 2024 ACTS project team\n"));
    assert!(header.literal().ends_with("http://mozilla.org/MPL/2.0/."));
    assert_eq!(header.literal().lines().count(), header.line_count());
  }

  #[test]
  fn test_every_line_has_comment_marker() {
    for line in header().literal().lines() {
      assert!(line.starts_with(COMMENT_MARKER), "line without marker: {line}");
    }
  }

  #[test]
  fn test_accepts_any_twenty_first_century_year() {
    let header = header();
    for year in [2000, 2016, 2024, 2099] {
      let other = HeaderTemplate::for_year(year).expect("header should build");
      assert!(header.matches(other.literal()), "year {year} should be accepted");
    }
  }

  #[test]
  fn test_rejects_years_outside_pattern() {
    let header = header();
    for year in [1999, 2100, 3024] {
      let other = HeaderTemplate::for_year(year).expect("header should build");
      assert!(!header.matches(other.literal()), "year {year} should be rejected");
    }
  }

  #[test]
  fn test_rejects_textual_deviations() {
    let header = header();
    let literal = header.literal().to_string();

    let lowercase = literal.replace("Mozilla Public", "mozilla public");
    assert!(!header.matches(&lowercase));

    let rewrapped = literal.replace("Public\n// License,", "Public License,\n//");
    assert!(!header.matches(&rewrapped));

    let escaped_dot = literal.replace("ACTS project.", "ACTS projectX");
    assert!(!header.matches(&escaped_dot));
  }

  #[test]
  fn test_match_is_anchored() {
    let header = header();
    assert!(!header.matches(&format!("// leading\n{}", header.literal())));
    assert!(!header.matches(&format!("{}\n// trailing", header.literal())));
    assert!(!header.matches(""));
  }

  #[test]
  fn test_normalized_lines() {
    let header = header();
    let lines = header.normalized_lines();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[2], "// Copyright (C) XXXX ACTS project team\n");
    assert!(lines.iter().all(|line| line.ends_with('\n')));
  }

  #[test]
  fn test_normalize_lines_of_empty_block() {
    assert!(header().normalize_lines("").is_empty());
  }
}
