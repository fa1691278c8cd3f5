//! Link-check status polling.
//!
//! This module provides:
//! - The task status record and its integer status-code mapping
//! - The `LinkCheckResponse` JSON envelope
//! - Collaborator contracts for the task-status and artifact stores, plus a
//!   filesystem-backed implementation
//! - [`poll_task`], which assembles a full poll response
//!
//! Status codes:
//!
//! - `-X` : failed or canceled at stage `X - 1` (clamped at `-2`)
//! - `0`  : no status record found (task not yet created)
//! - `1`  : first stage in progress (scanning)
//! - `2`  : second stage in progress (verifying)
//! - `3`  : succeeded, report attached

mod fs;
mod types;

use anyhow::{Context, Result};

use crate::artifact::parse_entries;
use crate::config::{
    BROKEN_LINKS_ARTIFACT, ERROR_ARTIFACT, STATUS_MAX_IN_PROGRESS, STATUS_MIN_FAILED,
    STATUS_NO_TASK, STATUS_SUCCEEDED,
};
use crate::error_handling::ReportStats;
use crate::report::{build_report, BlockResolver, UnresolvedPolicy};

// Re-export public API
pub use fs::FsTaskStore;
pub use types::{error_payload, LinkCheckResponse, TaskState, TaskStatus};

/// Reads the most recent status record for the link-check task, if any.
///
/// The record is authoritative once it exists: everything the poll reports is
/// derived from it and from the artifacts the task stored.
pub trait TaskStatusStore {
    /// Returns the latest status record, or `None` when no task has run yet.
    fn latest_status(&self) -> Result<Option<TaskStatus>>;
}

/// Reads named artifacts the task persisted (`BrokenLinks`, `Error`).
pub trait ArtifactStore {
    /// Returns the raw text of a named artifact, or `None` when absent.
    fn read_artifact(&self, name: &str) -> Result<Option<String>>;
}

/// Maps a task status record to the integer status code of the polling
/// contract.
pub fn status_code(task_status: Option<&TaskStatus>) -> i32 {
    match task_status {
        None => STATUS_NO_TASK,
        Some(status) => match status.state {
            TaskState::Succeeded => STATUS_SUCCEEDED,
            TaskState::Failed | TaskState::Canceled => {
                (-status.completed_steps.saturating_add(1)).max(STATUS_MIN_FAILED)
            }
            TaskState::Pending | TaskState::InProgress => status
                .completed_steps
                .saturating_add(1)
                .min(STATUS_MAX_IN_PROGRESS),
        },
    }
}

/// Assembles one poll response from the store.
///
/// Reads the latest status record and maps its code. On success the
/// `BrokenLinks` artifact is read, parsed, and folded into the report; on
/// failure the `Error` artifact (when present) is attached. Everything is
/// re-read on every call: the report is response-local and two concurrent
/// polls never share state.
///
/// # Errors
///
/// Fails when the store is unreadable, the artifact is malformed, or report
/// construction fails (see [`build_report`]). A succeeded task with no
/// `BrokenLinks` artifact is an error: the framework contract guarantees one.
pub fn poll_task<S>(
    store: &S,
    resolver: &dyn BlockResolver,
    policy: UnresolvedPolicy,
    stats: &ReportStats,
) -> Result<LinkCheckResponse>
where
    S: TaskStatusStore + ArtifactStore + ?Sized,
{
    let task_status = store.latest_status()?;
    let status = status_code(task_status.as_ref());

    let mut response = LinkCheckResponse {
        status,
        output: None,
        error: None,
    };

    match task_status {
        Some(ref record) if record.state == TaskState::Succeeded => {
            let content = store
                .read_artifact(BROKEN_LINKS_ARTIFACT)?
                .context("link check succeeded but no BrokenLinks artifact was stored")?;
            let entries = parse_entries(&content).context("Failed to parse BrokenLinks artifact")?;
            log::debug!("Building report from {} broken-link entries", entries.len());
            let report = build_report(&entries, resolver, policy, stats)
                .context("Failed to build broken-link report")?;
            response.output = Some(report);
        }
        Some(ref record)
            if record.state == TaskState::Failed || record.state == TaskState::Canceled =>
        {
            if let Some(text) = store.read_artifact(ERROR_ARTIFACT)? {
                response.error = Some(error_payload(&text));
            }
        }
        _ => {}
    }

    Ok(response)
}
