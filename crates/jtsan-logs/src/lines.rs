// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Raw line iteration over log input
//!
//! Logs are read as bytes. Only `\n` terminates a line, so a trailing `\r`
//! stays part of the line, and bytes that are not valid UTF-8 are replaced
//! rather than failing the read. Every marker is ASCII, so replacement never
//! changes whether a line matches.

use std::borrow::Cow;
use std::io::BufRead;

use crate::error::LogError;

/// Call `f` with every line read from `reader`, without its `\n`
///
/// # Errors
///
/// Returns `LogError::Read` if reading from `reader` fails.
pub fn for_each_line<R, F>(mut reader: R, mut f: F) -> Result<(), LogError>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let line: Cow<'_, str> = String::from_utf8_lossy(&buf);
        f(&line);
    }
}

/// Split in-memory log text on `\n`, keeping any `\r`
pub fn split_lines(log: &str) -> impl Iterator<Item = &str> {
    log.split_terminator('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn collect(input: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        for_each_line(input, |line| lines.push(line.to_string())).expect("Should read");
        lines
    }

    #[test]
    fn test_crlf_keeps_carriage_return() {
        assert_eq!(
            collect(b"DISABLE a\r\nplain\n"),
            vec!["DISABLE a\r".to_string(), "plain".to_string()]
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        assert_eq!(
            collect(b"one\ntwo"),
            vec!["one".to_string(), "two".to_string()]
        );
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(
            collect(b"caf\xe9 output\n===== testB ====\n"),
            vec![
                "caf\u{FFFD} output".to_string(),
                "===== testB ====".to_string()
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn test_split_lines_matches_reader() {
        let log = "a\r\n\nb\nc";
        let split: Vec<String> = split_lines(log).map(str::to_string).collect();
        assert_eq!(split, collect(log.as_bytes()));
    }
}
