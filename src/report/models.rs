//! Core data types for broken-link report building.

use serde::Deserialize;

use crate::error_handling::ResolveError;

/// One broken link found by the external scanning task.
///
/// `block_id` names the content block the link was found in (the terminal
/// block); `link` is the broken URL exactly as the scanner recorded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLinkEntry {
    /// Identifier of the block directly containing the link.
    pub block_id: String,
    /// The broken URL, preserved verbatim.
    pub link: String,
}

impl BrokenLinkEntry {
    /// Creates an entry from a `(block_id, link)` pair.
    pub fn new(block_id: impl Into<String>, link: impl Into<String>) -> Self {
        BrokenLinkEntry {
            block_id: block_id.into(),
            link: link.into(),
        }
    }
}

/// A node in the course content tree.
///
/// This is the shape the external content-tree collaborator must expose for
/// every resolvable block identifier: a display name, the block's own
/// location/category/course attributes, and an optional parent identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Block {
    /// The block's identifier (its location string).
    pub location: String,
    /// Human-readable name shown in the report.
    pub display_name: String,
    /// Block type (e.g. `html`, `video`, `vertical`).
    pub category: String,
    /// The course this block belongs to.
    pub course_id: String,
    /// Identifier of the parent block; `None` for a root-level block.
    #[serde(default)]
    pub parent: Option<String>,
}

impl Block {
    /// Editor URL for this block.
    ///
    /// Derived deterministically from the block's own attributes, never an
    /// ancestor's.
    pub fn editor_url(&self) -> String {
        format!(
            "/course/{}/editor/{}/{}",
            self.course_id, self.category, self.location
        )
    }
}

/// Content-tree lookup contract.
///
/// Maps a block identifier to its [`Block`]. Implementations must signal
/// unresolvable identifiers with [`ResolveError::NotFound`] rather than
/// fabricating a block; a missing block is a stale or deleted reference the
/// caller decides how to surface.
///
/// Lookups may block (the real tree lives in an external store); the report
/// builder calls them synchronously and in input order.
pub trait BlockResolver {
    /// Resolves a block identifier to its block.
    fn resolve(&self, block_id: &str) -> Result<Block, ResolveError>;
}
