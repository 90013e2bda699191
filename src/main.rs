//! # check-license
//!
//! Verifies that C++ sources start with the ACTS license header.

mod cli;

use std::process::ExitCode;

use crate::cli::{Cli, run_check};

fn main() -> ExitCode {
  let cli = Cli::parse_args();

  match run_check(cli.check_args) {
    Ok(code) => code,
    Err(e) => {
      eprintln!("ERROR: {e:#}");
      ExitCode::from(2)
    }
  }
}
