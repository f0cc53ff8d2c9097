// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Plain-text report rendering
//!
//! The layout is fixed:
//!
//! ```text
//! /path/to/run
//!  PASS  testA
//! !FAIL! testB
//! DISABLE testC
//!
//! ----
//! passed: 1, failed: 1, disabled: 1, total: 3
//! ```
//!
//! The disabled block is followed by one extra newline, so an empty block
//! still leaves a blank line before the separator.

use std::fmt;
use std::io::{self, Write};

use crate::result::{DisabledBlock, Summary, TestResult};

/// Separator between the disabled block and the summary line
pub const SEPARATOR: &str = "----";

/// Final report for one run directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    label: String,
    results: Vec<TestResult>,
    disabled: DisabledBlock,
    summary: Summary,
}

impl Report {
    /// Build a report, tallying the results
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        results: Vec<TestResult>,
        disabled: DisabledBlock,
    ) -> Self {
        let summary = Summary::tally(&results, disabled.count());
        Self {
            label: label.into(),
            results,
            disabled,
            summary,
        }
    }

    /// Heading line (the run directory as given)
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Per-test results in report order
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Collected disable-marker lines
    #[must_use]
    pub fn disabled(&self) -> &DisabledBlock {
        &self.disabled
    }

    /// Counts
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Failing tests in report order
    #[must_use]
    pub fn failing_tests(&self) -> Vec<&TestResult> {
        self.results.iter().filter(|r| r.failed()).collect()
    }

    /// Write the report
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        for result in &self.results {
            writeln!(f, "{}{}", result.outcome.tag(), result.name)?;
        }
        writeln!(f, "{}", self.disabled.text())?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "{}", self.summary)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "passed: {}, failed: {}, disabled: {}, total: {}",
            self.passed,
            self.failed,
            self.disabled,
            self.total()
        )
    }
}
