//! # check-license
//!
//! Verifies that source files start with the ACTS project license header and
//! optionally prepends it.
//!
//! Every checked file must begin with this block, with any year from 2000 to
//! 2099 in the copyright line:
//!
//! ```text
//! // This file is part of the ACTS project.
//! //
//! // Copyright (C) 2024 ACTS project team
//! //
//! // This Source Code Form is subject to the terms of the Mozilla Public
//! // License, v. 2.0. If a copy of the MPL was not distributed with this
//! // file, You can obtain one at http://mozilla.org/MPL/2.0/.
//! ```
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use check_license::config::Config;
//! use check_license::diff::DiffManager;
//! use check_license::file_filter::create_default_filter;
//! use check_license::header::HeaderTemplate;
//! use check_license::processor::{FileCollector, Processor};
//!
//! fn main() -> anyhow::Result<()> {
//!     let root = Path::new("Core");
//!     let filter = create_default_filter(root, &Config::default())?;
//!     let files = FileCollector::new(filter).collect(root)?;
//!
//!     let processor = Processor::new(HeaderTemplate::for_year(2024)?, false, DiffManager::default());
//!     let reports = processor.process(&files)?;
//!
//!     if reports.iter().any(|report| report.is_violation()) {
//!         println!("Some files have an invalid license header");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Collecting files and checking or fixing each one
//! * [`header`] - The expected header and its matching pattern
//! * [`diff`] - Unified diffs for violations
//! * [`config`] - `.check-license.toml` support
//! * [`logging`] - Logging utilities for verbose output

pub mod config;
pub mod diff;
pub mod error;
pub mod file_filter;
pub mod header;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
