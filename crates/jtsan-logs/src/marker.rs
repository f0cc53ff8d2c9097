// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Marker line recognition
//!
//! Both logs are free-form text. The only lines that matter are the ones
//! carrying one of a handful of markers, each recognised by a regular
//! expression searched anywhere in the line.

use regex::Regex;

/// Test boundary marker: `===== <name> ====`
pub const TEST_BOUNDARY_PATTERN: &str = "===== ([^ ]+) ====";

/// Exception raised by the instrumenting agent (the spelling is what the agent prints)
pub const EXCEPTION_PATTERN: &str = "Exception occured during transformation";

/// Administratively disabled test
pub const DISABLE_PATTERN: &str = "DISABLE (.*)";

/// Race detector did not observe a race the test expects
pub const RACE_NOT_FOUND_PATTERN: &str = "WARNING: expected race not found.";

/// Race detector reported a race
pub const DATA_RACE_PATTERN: &str = "WARNING: Possible data race";

/// Race-detector warnings that fail a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceWarning {
    /// `WARNING: expected race not found.`
    ExpectedRaceNotFound,
    /// `WARNING: Possible data race`
    PossibleDataRace,
}

impl RaceWarning {
    /// Short human-readable description
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::ExpectedRaceNotFound => "expected race not found",
            Self::PossibleDataRace => "possible data race",
        }
    }
}

/// Compiled marker patterns
#[derive(Debug, Clone)]
pub struct Markers {
    test_boundary: Regex,
    exception: Regex,
    disable: Regex,
    race_not_found: Regex,
    data_race: Regex,
}

impl Markers {
    /// Compile the marker patterns
    #[must_use]
    pub fn new() -> Self {
        Self {
            test_boundary: compile(TEST_BOUNDARY_PATTERN),
            exception: compile(EXCEPTION_PATTERN),
            disable: compile(DISABLE_PATTERN),
            race_not_found: compile(RACE_NOT_FOUND_PATTERN),
            data_race: compile(DATA_RACE_PATTERN),
        }
    }

    /// Extract the test name from a boundary line
    #[must_use]
    pub fn test_boundary<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.test_boundary
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Does the line report a transformation exception?
    #[must_use]
    pub fn is_exception(&self, line: &str) -> bool {
        self.exception.is_match(line)
    }

    /// Does the line mark a disabled test?
    #[must_use]
    pub fn is_disable(&self, line: &str) -> bool {
        self.disable.is_match(line)
    }

    /// Race-detector warnings present on the line, in check order
    ///
    /// Both warnings are checked independently, so a single line can yield two.
    #[must_use]
    pub fn race_warnings(&self, line: &str) -> Vec<RaceWarning> {
        let mut warnings = Vec::new();
        if self.race_not_found.is_match(line) {
            warnings.push(RaceWarning::ExpectedRaceNotFound);
        }
        if self.data_race.is_match(line) {
            warnings.push(RaceWarning::PossibleDataRace);
        }
        warnings
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("marker pattern is a valid regex")
}
