//! # File I/O Module
//!
//! Reading the leading comment block of a file and prepending the header.

use std::io::{BufRead, Read, Seek, SeekFrom, Write};

use crate::header::COMMENT_MARKER;

/// Reads the leading comment block from `reader`.
///
/// Lines are consumed one at a time until a line does not start with
/// [`COMMENT_MARKER`], the input ends, or `max_lines` lines were taken. The
/// collected text is trimmed. Windows line endings are read as `\n`.
pub fn read_license_block<R: BufRead>(reader: &mut R, max_lines: usize) -> std::io::Result<String> {
  let mut block = String::new();
  let mut line = String::new();

  for _ in 0..max_lines {
    line.clear();
    if reader.read_line(&mut line)? == 0 || !line.starts_with(COMMENT_MARKER) {
      break;
    }
    if line.ends_with("\r\n") {
      line.truncate(line.len() - 2);
      line.push('\n');
    }
    block.push_str(&line);
  }

  Ok(block.trim().to_string())
}

/// Writes `header` and a blank line in front of the existing content.
///
/// The whole content is read from the start and written back after the
/// header, so nothing already in the file is lost.
pub fn prepend_header<F: Read + Write + Seek>(file: &mut F, header: &str) -> std::io::Result<()> {
  file.seek(SeekFrom::Start(0))?;
  let mut content = Vec::new();
  file.read_to_end(&mut content)?;

  file.seek(SeekFrom::Start(0))?;
  file.write_all(header.as_bytes())?;
  file.write_all(b"\n\n")?;
  file.write_all(&content)?;
  file.flush()
}
