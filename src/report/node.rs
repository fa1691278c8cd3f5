//! The hierarchical report structure.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A node in the broken-link report tree.
///
/// The report root is a pure container (no display name, no URL); every other
/// node corresponds to a content block that was either the terminal block of
/// a broken-link entry or an ancestor of one. Children are keyed by block
/// identifier and kept in insertion order, which follows from the input order
/// of the artifact entries.
///
/// Serializes to a flattened JSON object: the scalar fields first (absent or
/// empty ones omitted), then each child identifier as a key:
///
/// ```json
/// {
///     "display_name": "Unit",
///     "blk-2": {
///         "display_name": "Page",
///         "url": "/course/course-v1:X+Y+Z/editor/html/blk-2",
///         "broken_links": ["http://dead.example"]
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportNode {
    /// Display name of the block this node stands for; `None` on the root.
    pub display_name: Option<String>,
    /// Editor URL; set only when this node is the terminal block of an entry.
    pub url: Option<String>,
    /// Broken links found directly in this block, in input order, duplicates kept.
    pub broken_links: Vec<String>,
    /// Child nodes keyed by block identifier, in insertion order.
    pub children: IndexMap<String, ReportNode>,
}

impl ReportNode {
    /// Creates the empty root container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node for a block, labeled with its display name.
    pub fn labeled(display_name: impl Into<String>) -> Self {
        ReportNode {
            display_name: Some(display_name.into()),
            ..Self::default()
        }
    }

    /// Returns the child node for a block identifier, if present.
    pub fn child(&self, block_id: &str) -> Option<&ReportNode> {
        self.children.get(block_id)
    }

    /// Total number of broken links in this subtree, duplicates included.
    pub fn total_links(&self) -> usize {
        self.broken_links.len()
            + self
                .children
                .values()
                .map(ReportNode::total_links)
                .sum::<usize>()
    }
}

impl Serialize for ReportNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(display_name) = &self.display_name {
            map.serialize_entry("display_name", display_name)?;
        }
        if let Some(url) = &self.url {
            map.serialize_entry("url", url)?;
        }
        if !self.broken_links.is_empty() {
            map.serialize_entry("broken_links", &self.broken_links)?;
        }
        for (block_id, child) in &self.children {
            map.serialize_entry(block_id, child)?;
        }
        map.end()
    }
}
