//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration, parsed from the command line.
///
/// Points the tool at a task directory (the status record and artifacts left
/// behind by the external link-check task) and a course tree file, and
/// selects between a one-shot poll and serving the poll response over HTTP.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "course_link_check",
    about = "Builds hierarchical broken-link reports from course link-check task artifacts"
)]
pub struct Config {
    /// Task directory containing status.json and the task's artifacts
    pub task_dir: PathBuf,

    /// Course tree JSON file (list of block records)
    #[arg(long)]
    pub tree: PathBuf,

    /// Write the poll response JSON to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the response JSON
    #[arg(long)]
    pub pretty: bool,

    /// Skip entries whose block cannot be resolved instead of failing the build
    #[arg(long)]
    pub skip_unresolved: bool,

    /// Serve the poll response on http://127.0.0.1:{port}/status instead of exiting
    #[arg(long)]
    pub status_port: Option<u16>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_parses_minimal_args() {
        let config =
            Config::parse_from(["course_link_check", "task_dir", "--tree", "tree.json"]);
        assert_eq!(config.task_dir, PathBuf::from("task_dir"));
        assert_eq!(config.tree, PathBuf::from("tree.json"));
        assert!(config.output.is_none());
        assert!(!config.skip_unresolved);
        assert!(config.status_port.is_none());
    }

    #[test]
    fn test_config_parses_all_flags() {
        let config = Config::parse_from([
            "course_link_check",
            "tasks/run-42",
            "--tree",
            "course.json",
            "--output",
            "report.json",
            "--pretty",
            "--skip-unresolved",
            "--status-port",
            "8080",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ]);
        assert_eq!(config.output, Some(PathBuf::from("report.json")));
        assert!(config.pretty);
        assert!(config.skip_unresolved);
        assert_eq!(config.status_port, Some(8080));
        assert!(matches!(config.log_level, LogLevel::Debug));
        assert!(matches!(config.log_format, LogFormat::Json));
    }

    #[test]
    fn test_config_requires_tree() {
        let result = Config::try_parse_from(["course_link_check", "task_dir"]);
        assert!(result.is_err());
    }
}
