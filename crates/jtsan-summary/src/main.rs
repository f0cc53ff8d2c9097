// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! jtsan-summary: pass/fail report for a jtsan test run
//!
//! Reads `java.log` and `tsan.log` from the given run directory and prints one
//! line per test followed by the disabled tests and a summary line.

use anyhow::Result;
use clap::Parser;

use jtsan_summary::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    jtsan_summary::init_tracing(&config);

    let stdout = std::io::stdout();
    jtsan_summary::run(&config, stdout.lock())?;
    Ok(())
}
