//! Task status and poll response data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::EnumIter as EnumIterMacro;

use crate::report::ReportNode;

/// Execution state of the external link-check task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIterMacro)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Queued, no stage completed yet.
    Pending,
    /// At least one stage running.
    InProgress,
    /// All stages completed; the `BrokenLinks` artifact exists.
    Succeeded,
    /// A stage failed; an `Error` artifact may exist.
    Failed,
    /// Canceled before completion.
    Canceled,
}

impl TaskState {
    /// Returns a human-readable string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Pending => "pending",
            TaskState::InProgress => "in progress",
            TaskState::Succeeded => "succeeded",
            TaskState::Failed => "failed",
            TaskState::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The status record the external task framework keeps for a link check.
///
/// `completed_steps` counts finished stages; together with `state` it maps to
/// the integer status code the polling surface reports. `created` orders
/// records when a store holds more than one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    /// Current execution state.
    pub state: TaskState,
    /// Number of completed stages.
    pub completed_steps: i32,
    /// When the task record was created.
    pub created: DateTime<Utc>,
}

/// The JSON envelope a status poll returns.
///
/// Serializes as `{"LinkCheckStatus": n}` plus `LinkCheckOutput` (the report)
/// when the check succeeded and `LinkCheckError` when it failed with a stored
/// error artifact.
#[derive(Debug, Serialize)]
pub struct LinkCheckResponse {
    /// Integer status code; see [`crate::status::status_code`].
    #[serde(rename = "LinkCheckStatus")]
    pub status: i32,
    /// The broken-link report, attached only on success.
    #[serde(rename = "LinkCheckOutput", skip_serializing_if = "Option::is_none")]
    pub output: Option<ReportNode>,
    /// Error payload from a failed task, if one was stored.
    #[serde(rename = "LinkCheckError", skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// Interprets a stored error artifact.
///
/// The task framework stores error text that is sometimes JSON and sometimes
/// a bare string; parse it as JSON when possible, otherwise carry the raw
/// text.
pub fn error_payload(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
