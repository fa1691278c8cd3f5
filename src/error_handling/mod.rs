//! Error handling and report statistics.
//!
//! This module provides:
//! - Error type definitions, one enum per concern
//! - Skip-accounting statistics for report builds
//!
//! Resolution failures are the only recoverable condition in the crate, and
//! only when the skip policy is in force; everything else fails the build.

mod stats;
mod types;

// Re-export public API
pub use stats::ReportStats;
pub use types::{
    ArtifactError, InitializationError, ReportError, ResolveError, SkipReason, TreeError,
};
