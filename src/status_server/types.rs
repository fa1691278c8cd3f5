//! Status server shared state.

use std::sync::Arc;

use crate::error_handling::ReportStats;
use crate::report::UnresolvedPolicy;
use crate::status::FsTaskStore;
use crate::tree::CourseTree;

/// Shared state for the status server.
///
/// Holds everything a poll needs; the task directory is re-read on every
/// request, so the endpoint always reflects the task's current state.
#[derive(Clone)]
pub struct StatusState {
    /// Store over the task directory.
    pub store: Arc<FsTaskStore>,
    /// The course content tree used to resolve block identifiers.
    pub tree: Arc<CourseTree>,
    /// What to do with unresolvable blocks.
    pub policy: UnresolvedPolicy,
    /// Skip accounting, shared with the rest of the run.
    pub stats: Arc<ReportStats>,
}
