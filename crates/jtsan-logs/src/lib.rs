// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! jtsan-logs: Functional and race-detector log correlation
//!
//! This library crate turns the two logs of a jtsan test run into a single
//! pass/fail/disabled report:
//!
//! - `java.log`, the functional test output, decides which tests exist and
//!   fails those that hit a transformation exception
//! - `tsan.log`, the offline race-detector output, fails tests with a race
//!   warning reported under their name
//!
//! # Example
//!
//! ```
//! use jtsan_logs::{Reducer, parse_functional_log, parse_race_log};
//!
//! let mut reducer = Reducer::new();
//! reducer.apply_functional(parse_functional_log("===== testC ====\n"));
//! reducer.apply_race(parse_race_log("===== testC ====\nWARNING: Possible data race\n"));
//!
//! let report = reducer.finish("/tmp/run");
//! assert_eq!(report.summary().failed, 1);
//! ```

pub mod error;
pub mod functional;
pub mod lines;
pub mod marker;
pub mod merge;
pub mod race;
pub mod report;
pub mod result;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

pub use error::LogError;
pub use functional::{FunctionalEvent, FunctionalParser, parse_functional_log, read_functional_log};
pub use marker::{Markers, RaceWarning};
pub use merge::{MergeStats, Reducer};
pub use race::{RaceEvent, RaceParser, parse_race_log, read_race_log};
pub use report::Report;
pub use result::{DisabledBlock, ResultTable, Summary, TestOutcome, TestResult};

/// Default functional log file name inside a run directory
pub const FUNCTIONAL_LOG: &str = "java.log";

/// Default race-detector log file name inside a run directory
pub const RACE_LOG: &str = "tsan.log";

/// Open a log file for buffered line reading
///
/// # Errors
///
/// Returns `LogError::Io` if the file cannot be opened.
pub fn open_log(path: &Path) -> Result<BufReader<File>, LogError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Read both logs and build the report
///
/// Each file is read to the end and closed before the next is opened.
///
/// # Errors
///
/// Returns `LogError::Io` naming the file that could not be opened or read.
pub fn summarize_files(
    label: impl Into<String>,
    functional_log: &Path,
    race_log: &Path,
) -> Result<Report, LogError> {
    let mut reducer = Reducer::new();

    let events = read_functional_log(open_log(functional_log)?)
        .map_err(|e| e.with_path(functional_log))?;
    info!(
        path = %functional_log.display(),
        events = events.len(),
        "parsed functional log"
    );
    reducer.apply_functional(events);

    let events = read_race_log(open_log(race_log)?).map_err(|e| e.with_path(race_log))?;
    info!(
        path = %race_log.display(),
        events = events.len(),
        "parsed race log"
    );
    reducer.apply_race(events);

    Ok(reducer.finish(label))
}

/// Summarize a run directory holding `java.log` and `tsan.log`
///
/// The report heading is the directory path as given.
///
/// # Errors
///
/// Returns `LogError::Io` if either log cannot be opened or read.
pub fn summarize_dir(dir: &Path) -> Result<Report, LogError> {
    summarize_files(
        dir.display().to_string(),
        &dir.join(FUNCTIONAL_LOG),
        &dir.join(RACE_LOG),
    )
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::LogError;
    pub use crate::merge::Reducer;
    pub use crate::report::Report;
    pub use crate::result::{Summary, TestOutcome, TestResult};
    pub use crate::{summarize_dir, summarize_files};
}
