// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for race log parsing
//!
//! Splits the input into a functional and a race log and checks that the
//! race log can only ever fail tests.

#![no_main]

use libfuzzer_sys::fuzz_target;

use jtsan_logs::{Reducer, TestOutcome, parse_functional_log, parse_race_log};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let (java_log, tsan_log) = input.split_once('\0').unwrap_or((input, input));

        let mut reducer = Reducer::new();
        reducer.apply_functional(parse_functional_log(java_log));
        let before = reducer.clone().finish("fuzz");
        reducer.apply_race(parse_race_log(tsan_log));
        let after = reducer.finish("fuzz");

        assert_eq!(before.results().len(), after.results().len());
        for (b, a) in before.results().iter().zip(after.results()) {
            if b.outcome == TestOutcome::Failed {
                assert_eq!(a.outcome, TestOutcome::Failed);
            }
        }
    }
});
