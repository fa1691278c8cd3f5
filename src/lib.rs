//! course_link_check library: broken-link report building for course content.
//!
//! This library turns the output of an asynchronous course link-check task
//! into a hierarchical broken-link report. It reads the task's status record
//! and persisted `BrokenLinks` artifact (a flat JSON list of
//! `[block_id, link]` pairs), resolves each block against a course content
//! tree, and folds the pairs into a nested report grouped by each block's
//! ancestor chain, with display names, editor URLs, and per-block link lists.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use course_link_check::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from([
//!     "course_link_check",
//!     "tasks/run-42",
//!     "--tree",
//!     "course.json",
//! ]);
//!
//! let outcome = run_check(config).await?;
//! println!(
//!     "LinkCheckStatus={} ({} broken links)",
//!     outcome.status, outcome.broken_links
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod artifact;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod report;
pub mod status;
mod status_server;
pub mod tree;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use report::{build_report, ReportNode, UnresolvedPolicy};
pub use run::{run_check, CheckOutcome};
pub use status::{poll_task, status_code, LinkCheckResponse};

// Internal run module (contains the application flow)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::{Config, STATUS_NO_TASK};
    use crate::error_handling::ReportStats;
    use crate::report::UnresolvedPolicy;
    use crate::status::{poll_task, FsTaskStore};
    use crate::status_server::{start_status_server, StatusState};
    use crate::tree::CourseTree;

    /// Results of a link-check poll.
    #[derive(Debug, Clone)]
    pub struct CheckOutcome {
        /// The integer status code of the polling contract.
        pub status: i32,
        /// Broken links in the report (0 unless the check succeeded).
        pub broken_links: usize,
        /// Artifact entries dropped under the skip policy.
        pub skipped_entries: usize,
        /// Where the response JSON was written, if not stdout.
        pub output_path: Option<PathBuf>,
    }

    /// Runs a link-check poll with the provided configuration.
    ///
    /// This is the main entry point for the library. It loads the course
    /// tree, polls the task directory once, and writes the response JSON to
    /// the configured output (or stdout). With `status_port` set it serves
    /// the poll response on `http://127.0.0.1:{port}/status` instead,
    /// re-reading the task directory on every request, until interrupted.
    ///
    /// # Errors
    ///
    /// Returns an error when the course tree cannot be loaded, the task
    /// directory is unreadable, the artifact is malformed, or report
    /// construction fails (unresolvable block under the fail policy).
    pub async fn run_check(config: Config) -> Result<CheckOutcome> {
        let tree = CourseTree::load(&config.tree).await?;
        let store = FsTaskStore::new(&config.task_dir);
        let stats = ReportStats::new();
        let policy = if config.skip_unresolved {
            UnresolvedPolicy::Skip
        } else {
            UnresolvedPolicy::Fail
        };

        if let Some(port) = config.status_port {
            let state = StatusState {
                store: Arc::new(store),
                tree: Arc::new(tree),
                policy,
                stats: Arc::new(stats),
            };
            start_status_server(port, state).await?;
            // serve() only returns once the server stops
            return Ok(CheckOutcome {
                status: STATUS_NO_TASK,
                broken_links: 0,
                skipped_entries: 0,
                output_path: None,
            });
        }

        let response = poll_task(&store, &tree, policy, &stats)?;
        info!("Link check status: {}", response.status);

        let json = if config.pretty {
            serde_json::to_string_pretty(&response)
        } else {
            serde_json::to_string(&response)
        }
        .context("Failed to serialize poll response")?;

        match &config.output {
            Some(path) => {
                tokio::fs::write(path, &json)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote poll response to {}", path.display());
            }
            None => println!("{json}"),
        }

        stats.log_summary();

        Ok(CheckOutcome {
            status: response.status,
            broken_links: response
                .output
                .as_ref()
                .map(|report| report.total_links())
                .unwrap_or(0),
            skipped_entries: stats.total_skipped(),
            output_path: config.output,
        })
    }
}
