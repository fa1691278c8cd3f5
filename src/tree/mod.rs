//! In-memory course content tree.
//!
//! The real content tree lives in an external store; this module gives the
//! CLI and the status endpoint a concrete [`BlockResolver`] backed by a JSON
//! file (a flat list of block records with optional `parent` references).
//! Load-time validation rejects duplicate locations and dangling parents so
//! resolution failures at build time always mean a genuinely stale artifact.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::error_handling::{ResolveError, TreeError};
use crate::report::{Block, BlockResolver};

/// An in-memory course content tree, keyed by block location.
#[derive(Debug)]
pub struct CourseTree {
    blocks: HashMap<String, Block>,
}

impl CourseTree {
    /// Builds a tree from block records, validating structural integrity.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::DuplicateLocation`] when two records share a
    /// location, and [`TreeError::DanglingParent`] when a record names a
    /// parent that is not in the list.
    pub fn new(records: Vec<Block>) -> Result<Self, TreeError> {
        let mut blocks = HashMap::with_capacity(records.len());
        for block in records {
            if blocks.contains_key(&block.location) {
                return Err(TreeError::DuplicateLocation(block.location));
            }
            blocks.insert(block.location.clone(), block);
        }

        for block in blocks.values() {
            if let Some(parent) = &block.parent {
                if !blocks.contains_key(parent) {
                    return Err(TreeError::DanglingParent {
                        block: block.location.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }

        Ok(CourseTree { blocks })
    }

    /// Loads and validates a course tree from a JSON file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read course tree {}", path.display()))?;
        let records: Vec<Block> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse course tree {}", path.display()))?;
        let tree = Self::new(records)
            .with_context(|| format!("Invalid course tree {}", path.display()))?;
        log::info!("Loaded course tree with {} blocks", tree.len());
        Ok(tree)
    }

    /// Number of blocks in the tree.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the tree has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl BlockResolver for CourseTree {
    fn resolve(&self, block_id: &str) -> Result<Block, ResolveError> {
        self.blocks
            .get(block_id)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(block_id.to_string()))
    }
}
