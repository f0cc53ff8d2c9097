// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test result types

use std::collections::HashMap;

/// Possible test outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestOutcome {
    /// Test passed
    Passed,
    /// Test failed
    Failed,
}

impl TestOutcome {
    /// Fixed-width status tag used in the report
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Passed => " PASS  ",
            Self::Failed => "!FAIL! ",
        }
    }
}

/// Represents the final result of one test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    /// Test name
    pub name: String,
    /// Test outcome
    pub outcome: TestOutcome,
}

impl TestResult {
    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == TestOutcome::Passed
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.outcome == TestOutcome::Failed
    }
}

/// Outcome per test, keeping the order tests were first seen in
///
/// Outcomes can only be downgraded once inserted.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    order: Vec<String>,
    outcomes: HashMap<String, TestOutcome>,
}

impl ResultTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test boundary: the test is appended to the order and
    /// (re)initialised as passing
    pub fn insert_passed(&mut self, name: &str) {
        self.order.push(name.to_string());
        self.outcomes.insert(name.to_string(), TestOutcome::Passed);
    }

    /// Mark a known test as failed
    ///
    /// Returns `false` if the test is not in the table.
    pub fn downgrade(&mut self, name: &str) -> bool {
        match self.outcomes.get_mut(name) {
            Some(outcome) => {
                *outcome = TestOutcome::Failed;
                true
            }
            None => false,
        }
    }

    /// Look up a test's outcome
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<TestOutcome> {
        self.outcomes.get(name).copied()
    }

    /// Whether the test has been seen
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.outcomes.contains_key(name)
    }

    /// Test names in first-seen order (repeated boundaries appear again)
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Number of distinct tests
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no test has been seen
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Final results in report order
    #[must_use]
    pub fn results(&self) -> Vec<TestResult> {
        self.order
            .iter()
            .filter_map(|name| {
                self.outcomes.get(name).map(|&outcome| TestResult {
                    name: name.clone(),
                    outcome,
                })
            })
            .collect()
    }
}

/// Raw disable-marker lines and their count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledBlock {
    lines: Vec<String>,
}

impl DisabledBlock {
    /// Append a disable-marker line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Number of disable-marker lines
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// The lines, verbatim
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines concatenated, each terminated by a newline
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.iter().fold(String::new(), |mut text, line| {
            text.push_str(line);
            text.push('\n');
            text
        })
    }
}

/// Counts shown on the summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Tests passed
    pub passed: usize,
    /// Tests failed
    pub failed: usize,
    /// Disable-marker lines
    pub disabled: usize,
}

impl Summary {
    /// Tally a set of results and a disabled count
    #[must_use]
    pub fn tally(results: &[TestResult], disabled: usize) -> Self {
        let passed = results.iter().filter(|r| r.passed()).count();
        Self {
            passed,
            failed: results.len() - passed,
            disabled,
        }
    }

    /// passed + failed + disabled
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.disabled
    }

    /// Check if no test failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
