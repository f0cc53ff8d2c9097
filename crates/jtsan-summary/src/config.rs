// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for jtsan-summary
//!
//! All settings come from the command line. Only `RUST_LOG` is read from the
//! environment, by the tracing filter.

use std::path::PathBuf;

use clap::Parser;
use jtsan_logs::{FUNCTIONAL_LOG, RACE_LOG};

/// Summarize a jtsan run's functional and race-detector logs
#[derive(Parser, Debug, Clone)]
#[command(name = "jtsan-summary")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Run directory holding the logs
    ///
    /// Echoed verbatim as the first line of the report.
    pub dir: PathBuf,

    /// Functional test log file name, relative to the run directory
    #[arg(long, default_value = FUNCTIONAL_LOG)]
    pub functional_log: PathBuf,

    /// Race-detector log file name, relative to the run directory
    #[arg(long, default_value = RACE_LOG)]
    pub race_log: PathBuf,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so the report on stdout stays clean.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            functional_log: PathBuf::from(FUNCTIONAL_LOG),
            race_log: PathBuf::from(RACE_LOG),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Create a configuration for a run directory with default log names
    #[must_use]
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Path of the functional log
    #[must_use]
    pub fn functional_log_path(&self) -> PathBuf {
        self.dir.join(&self.functional_log)
    }

    /// Path of the race-detector log
    #[must_use]
    pub fn race_log_path(&self) -> PathBuf {
        self.dir.join(&self.race_log)
    }

    /// Report heading: the run directory as given on the command line
    #[must_use]
    pub fn label(&self) -> String {
        self.dir.display().to_string()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the run directory doesn't exist or isn't a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dir.exists() {
            return Err(ConfigError::RunDirNotFound(self.dir.clone()));
        }
        if !self.dir.is_dir() {
            return Err(ConfigError::RunDirNotDirectory(self.dir.clone()));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Run directory not found
    #[error("Run directory not found: {}", .0.display())]
    RunDirNotFound(PathBuf),

    /// Run directory path is not a directory
    #[error("Run directory is not a directory: {}", .0.display())]
    RunDirNotDirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dir, PathBuf::from("."));
        assert_eq!(config.functional_log, PathBuf::from("java.log"));
        assert_eq!(config.race_log, PathBuf::from("tsan.log"));
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_log_paths_join_dir() {
        let config = Config::for_dir("/runs/42");
        assert_eq!(
            config.functional_log_path(),
            PathBuf::from("/runs/42/java.log")
        );
        assert_eq!(config.race_log_path(), PathBuf::from("/runs/42/tsan.log"));
    }

    #[test]
    fn test_label_is_dir_as_given() {
        let config = Config::for_dir("runs/../runs/42/");
        assert_eq!(config.label(), "runs/../runs/42/");
    }

    #[test]
    fn test_log_level() {
        assert_eq!(Config::default().log_level(), tracing::Level::INFO);
        let verbose = Config {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(verbose.log_level(), tracing::Level::DEBUG);
        let quiet = Config {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(quiet.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_validate_nonexistent_dir() {
        let config = Config::for_dir("/nonexistent/path/12345");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RunDirNotFound(_))
        ));
    }

    #[test]
    fn test_validate_file_is_not_dir() {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let config = Config::for_dir(manifest);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RunDirNotDirectory(_))
        ));
    }

    #[test]
    fn test_validate_valid_dir() {
        let config = Config::for_dir(env!("CARGO_MANIFEST_DIR"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
