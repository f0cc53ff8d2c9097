// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Offline race-detector log parsing
//!
//! The race log (`tsan.log`) repeats the functional log's test boundaries and
//! interleaves the detector's warnings. Every warning is attributed to the
//! most recent boundary.

use std::io::BufRead;

use tracing::debug;

use crate::error::LogError;
use crate::lines::{for_each_line, split_lines};
use crate::marker::{Markers, RaceWarning};

/// A race-detector warning attributed to a test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceEvent {
    /// Test the warning was reported under
    pub test: String,
    /// Kind of warning
    pub warning: RaceWarning,
}

/// Line-by-line parser for the race log
#[derive(Debug, Clone, Default)]
pub struct RaceParser {
    markers: Markers,
    current: Option<String>,
    events: Vec<RaceEvent>,
    orphaned: usize,
}

impl RaceParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single line of the log (without its line terminator)
    pub fn process_line(&mut self, line: &str) {
        if let Some(name) = self.markers.test_boundary(line) {
            self.current = Some(name.to_string());
        }

        for warning in self.markers.race_warnings(line) {
            match &self.current {
                Some(test) => {
                    debug!(test = %test, warning = warning.describe(), "race warning");
                    self.events.push(RaceEvent {
                        test: test.clone(),
                        warning,
                    });
                }
                None => {
                    debug!(
                        warning = warning.describe(),
                        "race warning before any test boundary, ignoring"
                    );
                    self.orphaned += 1;
                }
            }
        }
    }

    /// The test currently being read, if any
    #[must_use]
    pub fn current_test(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Warnings seen before the first boundary marker
    #[must_use]
    pub fn orphaned_warnings(&self) -> usize {
        self.orphaned
    }

    /// Events accumulated so far
    #[must_use]
    pub fn events(&self) -> &[RaceEvent] {
        &self.events
    }

    /// Finish parsing and take the accumulated events
    #[must_use]
    pub fn into_events(self) -> Vec<RaceEvent> {
        self.events
    }
}

/// Parse a complete race log held in memory
#[must_use]
pub fn parse_race_log(log: &str) -> Vec<RaceEvent> {
    let mut parser = RaceParser::new();
    for line in split_lines(log) {
        parser.process_line(line);
    }
    parser.into_events()
}

/// Parse a race log from a reader
///
/// Lines that are not valid UTF-8 are read lossily rather than rejected.
///
/// # Errors
///
/// Returns `LogError::Read` if reading from `reader` fails.
pub fn read_race_log<R: BufRead>(reader: R) -> Result<Vec<RaceEvent>, LogError> {
    let mut parser = RaceParser::new();
    for_each_line(reader, |line| parser.process_line(line))?;
    Ok(parser.into_events())
}
