//! Error type definitions.
//!
//! This module defines all error types used throughout the application, one
//! enum per concern: initialization, content-tree resolution, report
//! building, artifact parsing, and tree loading.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A block identifier could not be resolved against the content tree.
///
/// This is the distinguishable not-found condition the resolver contract
/// requires: a missing block indicates a stale or deleted reference, which
/// callers surface rather than mask.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No block with this identifier exists in the content tree.
    #[error("block '{0}' not found in course tree")]
    NotFound(String),
}

/// Error types for broken-link report construction.
#[derive(Error, Debug)]
pub enum ReportError {
    /// An entry's block (or one of its ancestors) could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolveError),

    /// A block's parent chain loops back on itself.
    #[error("cycle detected in parent chain at block '{0}'")]
    ParentCycle(String),

    /// A parent chain is deeper than any well-formed content tree.
    #[error("ancestor chain for block '{block_id}' exceeds {max_depth} levels")]
    DepthExceeded {
        /// The block whose chain walk hit the bound.
        block_id: String,
        /// The depth bound that was exceeded.
        max_depth: usize,
    },
}

/// Error types for broken-link artifact parsing.
///
/// The artifact contract is a JSON list of two-element `[block_id, link]`
/// string pairs. Anything else fails fast with a diagnostic naming the
/// offending entry rather than being silently truncated or padded.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The artifact body is not valid JSON at all.
    #[error("artifact is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The artifact's top level is not a JSON list.
    #[error("artifact must be a JSON list of [block_id, link] pairs, got {0}")]
    NotAList(String),

    /// An entry is not a two-element pair of strings.
    #[error("malformed entry at index {index}: {reason}")]
    MalformedEntry {
        /// Zero-based position of the entry in the artifact list.
        index: usize,
        /// What was wrong with the entry.
        reason: String,
    },
}

/// Error types for course tree loading and validation.
#[derive(Error, Debug)]
pub enum TreeError {
    /// Two block records share the same location identifier.
    #[error("duplicate block location '{0}' in course tree")]
    DuplicateLocation(String),

    /// A block names a parent that is not in the tree.
    #[error("block '{block}' references unknown parent '{parent}'")]
    DanglingParent {
        /// The block carrying the bad reference.
        block: String,
        /// The parent identifier that could not be found.
        parent: String,
    },
}

/// Types of entries dropped while building a report under the skip policy.
///
/// These are counted in [`crate::error_handling::ReportStats`] so a run can
/// report how much of the artifact it had to ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// The entry's own block identifier was not in the content tree.
    UnresolvedBlock,
    /// The entry's block resolved, but an ancestor in its parent chain did not.
    UnresolvedAncestor,
}

impl SkipReason {
    /// Returns a human-readable string representation of the skip reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::UnresolvedBlock => "unresolved block",
            SkipReason::UnresolvedAncestor => "unresolved ancestor",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_resolve_error_message_names_block() {
        let err = ResolveError::NotFound("block-v1:X+Y+Z@html@deadbeef".to_string());
        assert_eq!(
            err.to_string(),
            "block 'block-v1:X+Y+Z@html@deadbeef' not found in course tree"
        );
    }

    #[test]
    fn test_report_error_is_transparent_over_resolution() {
        // Resolution failures surface the resolver's own message unchanged
        let err = ReportError::from(ResolveError::NotFound("blk-1".to_string()));
        assert_eq!(err.to_string(), "block 'blk-1' not found in course tree");
    }

    #[test]
    fn test_malformed_entry_names_index_and_reason() {
        let err = ArtifactError::MalformedEntry {
            index: 3,
            reason: "expected 2 elements, got 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed entry at index 3: expected 2 elements, got 1"
        );
    }

    #[test]
    fn test_all_skip_reasons_have_string_representation() {
        for reason in SkipReason::iter() {
            assert!(
                !reason.as_str().is_empty(),
                "{:?} should have non-empty string",
                reason
            );
        }
    }
}
