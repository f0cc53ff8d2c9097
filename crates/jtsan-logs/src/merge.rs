// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Merging parsed events into final results
//!
//! The functional log decides which tests exist and seeds their outcomes.
//! The race log can then only fail tests, never pass or add them.

use tracing::{debug, warn};

use crate::functional::FunctionalEvent;
use crate::race::RaceEvent;
use crate::report::Report;
use crate::result::{DisabledBlock, ResultTable};

/// Statistics about one merge step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Events that failed a known test
    pub downgraded: usize,
    /// Race events naming a test the functional log never reported
    pub unknown_tests: usize,
}

/// Folds functional and race events into a result table
#[derive(Debug, Clone, Default)]
pub struct Reducer {
    table: ResultTable,
    disabled: DisabledBlock,
}

impl Reducer {
    /// Create an empty reducer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply functional-log events
    pub fn apply_functional<I>(&mut self, events: I) -> MergeStats
    where
        I: IntoIterator<Item = FunctionalEvent>,
    {
        let mut stats = MergeStats::default();
        for event in events {
            match event {
                FunctionalEvent::TestStarted(name) => self.table.insert_passed(&name),
                FunctionalEvent::Exception(name) => {
                    if self.table.downgrade(&name) {
                        stats.downgraded += 1;
                    }
                }
                FunctionalEvent::Disabled(line) => self.disabled.push(line),
            }
        }
        debug!(
            tests = self.table.len(),
            failed = stats.downgraded,
            disabled = self.disabled.count(),
            "applied functional log"
        );
        stats
    }

    /// Apply race-log events
    ///
    /// Tests that were never seen in the functional log are skipped.
    pub fn apply_race<I>(&mut self, events: I) -> MergeStats
    where
        I: IntoIterator<Item = RaceEvent>,
    {
        let mut stats = MergeStats::default();
        for event in events {
            if self.table.downgrade(&event.test) {
                stats.downgraded += 1;
            } else {
                warn!(
                    test = %event.test,
                    warning = event.warning.describe(),
                    "race log names a test missing from the functional log, ignoring"
                );
                stats.unknown_tests += 1;
            }
        }
        debug!(
            downgraded = stats.downgraded,
            unknown = stats.unknown_tests,
            "applied race log"
        );
        stats
    }

    /// The table as merged so far
    #[must_use]
    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    /// Disabled lines collected so far
    #[must_use]
    pub fn disabled(&self) -> &DisabledBlock {
        &self.disabled
    }

    /// Build the report
    #[must_use]
    pub fn finish(self, label: impl Into<String>) -> Report {
        Report::new(label, self.table.results(), self.disabled)
    }
}
