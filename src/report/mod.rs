//! Broken-link report building.
//!
//! This module provides:
//! - The core data types (entries, blocks, the resolver contract)
//! - The hierarchical [`ReportNode`] structure and its JSON shape
//! - [`build_report`], the fold from flat artifact entries into the report
//!
//! The report is a derived, response-local structure: it is built once per
//! poll from the artifact's persisted content and never persisted itself.

mod builder;
mod models;
mod node;

// Re-export public API
pub use builder::{build_report, UnresolvedPolicy};
pub use models::{Block, BlockResolver, BrokenLinkEntry};
pub use node::ReportNode;
