// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! jtsan-summary library
//!
//! This module exports the command-line wiring of jtsan-summary for use in
//! integration tests and as a library.

pub mod config;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use config::Config;
use jtsan_logs::Summary;

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` directives are applied on top of the level chosen by the
/// verbose/quiet flags.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read the run's logs and write the report to `out`
///
/// # Errors
///
/// Returns an error if the run directory is invalid, if either log cannot be
/// read, or if writing the report fails.
pub fn run<W: Write>(config: &Config, out: W) -> Result<Summary> {
    config.validate()?;
    debug!(
        functional = %config.functional_log_path().display(),
        race = %config.race_log_path().display(),
        "summarizing run"
    );

    let report = jtsan_logs::summarize_files(
        config.label(),
        &config.functional_log_path(),
        &config.race_log_path(),
    )?;

    report.write_to(out).context("Failed to write report")?;

    let summary = report.summary();
    info!(
        passed = summary.passed,
        failed = summary.failed,
        disabled = summary.disabled,
        "report written"
    );
    Ok(summary)
}
