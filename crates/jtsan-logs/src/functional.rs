// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Functional test log parsing
//!
//! The functional log (`java.log`) is the output of the instrumented Java test
//! suite. Each test opens with a boundary marker, and any of its lines may
//! report a transformation exception. Disabled tests are announced on lines
//! carrying a `DISABLE` marker.
//!
//! # Example
//!
//! ```
//! use jtsan_logs::functional::{FunctionalEvent, parse_functional_log};
//!
//! let events = parse_functional_log("===== testA ====\nDISABLE testZ\n");
//! assert_eq!(events[0], FunctionalEvent::TestStarted("testA".to_string()));
//! assert_eq!(events[1], FunctionalEvent::Disabled("DISABLE testZ".to_string()));
//! ```

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::LogError;
use crate::lines::{for_each_line, split_lines};
use crate::marker::Markers;

/// A single record extracted from the functional log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionalEvent {
    /// A test boundary marker was seen; the test starts out passing
    TestStarted(String),
    /// The named test hit a transformation exception
    Exception(String),
    /// A disable marker line, kept verbatim
    Disabled(String),
}

/// Line-by-line parser for the functional log
///
/// Tracks the test whose output is currently being read. The cursor only
/// moves on boundary lines.
#[derive(Debug, Clone, Default)]
pub struct FunctionalParser {
    markers: Markers,
    current: Option<String>,
    events: Vec<FunctionalEvent>,
}

impl FunctionalParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single line of the log (without its line terminator)
    pub fn process_line(&mut self, line: &str) {
        if let Some(name) = self.markers.test_boundary(line) {
            trace!(test = name, "test boundary");
            self.current = Some(name.to_string());
            self.events.push(FunctionalEvent::TestStarted(name.to_string()));
        } else if self.markers.is_exception(line) {
            match &self.current {
                Some(test) => {
                    debug!(test = %test, "transformation exception");
                    self.events.push(FunctionalEvent::Exception(test.clone()));
                }
                None => debug!("transformation exception before any test boundary"),
            }
        }

        if self.markers.is_disable(line) {
            self.events.push(FunctionalEvent::Disabled(line.to_string()));
        }
    }

    /// The test currently being read, if any
    #[must_use]
    pub fn current_test(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Events accumulated so far
    #[must_use]
    pub fn events(&self) -> &[FunctionalEvent] {
        &self.events
    }

    /// Finish parsing and take the accumulated events
    #[must_use]
    pub fn into_events(self) -> Vec<FunctionalEvent> {
        self.events
    }
}

/// Parse a complete functional log held in memory
#[must_use]
pub fn parse_functional_log(log: &str) -> Vec<FunctionalEvent> {
    let mut parser = FunctionalParser::new();
    for line in split_lines(log) {
        parser.process_line(line);
    }
    parser.into_events()
}

/// Parse a functional log from a reader
///
/// Lines that are not valid UTF-8 are read lossily rather than rejected.
///
/// # Errors
///
/// Returns `LogError::Read` if reading from `reader` fails.
pub fn read_functional_log<R: BufRead>(reader: R) -> Result<Vec<FunctionalEvent>, LogError> {
    let mut parser = FunctionalParser::new();
    for_each_line(reader, |line| parser.process_line(line))?;
    Ok(parser.into_events())
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn started(name: &str) -> FunctionalEvent {
        FunctionalEvent::TestStarted(name.to_string())
    }

    #[test]
    fn test_single_boundary() {
        assert_eq!(parse_functional_log("===== testA ===="), vec![started("testA")]);
    }

    #[test]
    fn test_exception_attributed_to_current_test() {
        let log = "===== testA ====\n\
                   ===== testB ====\n\
                   some output\n\
                   java.lang.RuntimeException: Exception occured during transformation\n";
        assert_eq!(
            parse_functional_log(log),
            vec![
                started("testA"),
                started("testB"),
                FunctionalEvent::Exception("testB".to_string()),
            ]
        );
    }

    #[test]
    fn test_exception_before_boundary_is_ignored() {
        let log = "Exception occured during transformation\n===== testA ====\n";
        assert_eq!(parse_functional_log(log), vec![started("testA")]);
    }

    #[test]
    fn test_exception_on_boundary_line_is_not_counted() {
        let log = "===== testA ==== Exception occured during transformation";
        assert_eq!(parse_functional_log(log), vec![started("testA")]);
    }

    #[test]
    fn test_disable_line_kept_verbatim() {
        let log = "  DISABLE some_flaky_test  \n";
        assert_eq!(
            parse_functional_log(log),
            vec![FunctionalEvent::Disabled("  DISABLE some_flaky_test  ".to_string())]
        );
    }

    #[test]
    fn test_disable_checked_on_boundary_lines() {
        let log = "===== testA ==== DISABLE testA";
        assert_eq!(
            parse_functional_log(log),
            vec![
                started("testA"),
                FunctionalEvent::Disabled("===== testA ==== DISABLE testA".to_string()),
            ]
        );
    }

    #[test]
    fn test_repeated_boundary_emits_again() {
        let log = "===== testA ====\n===== testA ====\n";
        assert_eq!(parse_functional_log(log), vec![started("testA"), started("testA")]);
    }

    #[test]
    fn test_streaming_cursor() {
        let mut parser = FunctionalParser::new();
        assert_eq!(parser.current_test(), None);

        parser.process_line("noise");
        assert!(parser.events().is_empty());

        parser.process_line("===== testX ====");
        assert_eq!(parser.current_test(), Some("testX"));

        parser.process_line("more noise");
        assert_eq!(parser.current_test(), Some("testX"));
        assert_eq!(parser.into_events(), vec![started("testX")]);
    }

    #[test]
    fn test_read_from_reader() {
        let log = b"===== testA ====\r\nException occured during transformation\r\n";
        let events = read_functional_log(&log[..]).expect("Should read");
        assert_eq!(
            events,
            vec![
                started("testA"),
                FunctionalEvent::Exception("testA".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_invalid_utf8_line_is_tolerated() {
        let log: &[u8] = b"===== testA ====\ncaf\xe9 output\n\xff\xfe\n===== testB ====\n";
        let events = read_functional_log(log).expect("Should read");
        assert_eq!(events, vec![started("testA"), started("testB")]);
    }

    #[test]
    fn test_read_crlf_disable_line_kept_verbatim() {
        let log: &[u8] = b"===== testA ====\r\nDISABLE some_flaky_test\r\n";
        let events = read_functional_log(log).expect("Should read");
        assert_eq!(
            events,
            vec![
                started("testA"),
                FunctionalEvent::Disabled("DISABLE some_flaky_test\r".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_invalid_utf8_in_disable_line() {
        let log: &[u8] = b"DISABLE caf\xe9\n";
        let events = read_functional_log(log).expect("Should read");
        assert_eq!(
            events,
            vec![FunctionalEvent::Disabled("DISABLE caf\u{FFFD}".to_string())]
        );
    }

    #[test]
    fn test_empty_log() {
        assert!(parse_functional_log("").is_empty());
    }
}
