//! # Check Command
//!
//! This module implements the check/fix run over a file or directory.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use check_license::config::load_config;
use check_license::diff::DiffManager;
use check_license::error::CheckError;
use check_license::file_filter::create_default_filter;
use check_license::header::HeaderTemplate;
use check_license::info_log;
use check_license::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use check_license::output::{print_all_files_ok, print_hint, print_start_message, print_summary};
use check_license::processor::{FileCollector, Processor};
use check_license::report::{ProcessingSummary, write_json_report};
use chrono::Datelike;
use clap::Args;
use tracing::debug;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// File or directory to check. Directories are scanned recursively.
  #[arg(value_name = "INPUT")]
  pub input: PathBuf,

  /// Prepend the license header to every file without a valid one
  #[arg(long)]
  pub fix: bool,

  /// Copyright year written by --fix (default: current year)
  #[arg(long, value_parser = clap::value_parser!(i32).range(1000..=9999))]
  pub year: Option<i32>,

  /// Only check files with these extensions (repeatable, case-insensitive)
  /// [default: cpp, hpp, ipp]
  #[arg(long, value_name = "EXT")]
  pub include_ext: Vec<String>,

  /// File patterns to ignore, relative to INPUT (supports glob patterns)
  #[arg(long, short = 'i', value_name = "PATTERN")]
  pub ignore: Vec<String>,

  /// Path to config file (default: .check-license.toml in INPUT)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long, conflicts_with = "config")]
  pub no_config: bool,

  /// Also append every diff to this file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Write a JSON report of all checked files to this path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except violations and errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the check command with the given arguments.
///
/// Returns exit status `1` if any file had an invalid header, even when it
/// was fixed during this run.
pub fn run_check(args: CheckArgs) -> Result<ExitCode> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  if !args.input.exists() {
    return Err(CheckError::MissingInput(args.input).into());
  }

  let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
  debug!("Using copyright year {}", year);

  let mut config = load_config(args.config.as_deref(), config_search_dir(&args.input), args.no_config)?;
  config.merge_cli(args.include_ext, args.ignore);
  debug!("Checking extensions: {:?}", config.extensions());

  let filter = create_default_filter(&args.input, &config)?;
  let files = FileCollector::new(filter).collect(&args.input)?;

  let header = HeaderTemplate::for_year(year)?;
  let diff_manager = DiffManager::new(args.save_diff);
  diff_manager.init()?;

  print_start_message(files.len(), args.fix);

  let start_time = Instant::now();
  let processor = Processor::new(header, args.fix, diff_manager);
  let reports = processor.process(&files)?;
  let summary = ProcessingSummary::from_reports(&reports, start_time.elapsed());

  if summary.violations() == 0 {
    print_all_files_ok();
  }
  print_summary(&summary);
  if summary.violations() > 0 && !args.fix {
    print_hint("Run with --fix to prepend the license header.");
  }

  if let Some(ref output_path) = args.report_json {
    write_json_report(output_path, &reports, &summary)
      .with_context(|| format!("Failed to generate JSON report at {}", output_path.display()))?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  if summary.violations() > 0 {
    Ok(ExitCode::FAILURE)
  } else {
    Ok(ExitCode::SUCCESS)
  }
}

/// Directory searched for `.check-license.toml`.
fn config_search_dir(input: &Path) -> &Path {
  if input.is_dir() {
    return input;
  }
  match input.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  }
}
