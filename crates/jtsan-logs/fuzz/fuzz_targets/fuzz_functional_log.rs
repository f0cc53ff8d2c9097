// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for functional log parsing
//!
//! Feeds arbitrary bytes through the buffered reader path and renders the
//! resulting report.

#![no_main]

use libfuzzer_sys::fuzz_target;

use jtsan_logs::{Reducer, read_functional_log};

fuzz_target!(|data: &[u8]| {
    // Reading a byte slice cannot fail; invalid UTF-8 is read lossily
    let events = read_functional_log(data).expect("in-memory read cannot fail");
    let mut reducer = Reducer::new();
    reducer.apply_functional(events);
    let report = reducer.finish("fuzz");
    let summary = report.summary();
    assert_eq!(summary.passed + summary.failed + summary.disabled, summary.total());
    let _ = report.to_string();
});
