//! Broken-link report construction.
//!
//! Folds the flat `(block_id, link)` list produced by the scanning task into
//! a nested report keyed by each block's ancestor chain. The build is a pure,
//! synchronous, single-pass transformation: no I/O beyond the injected
//! resolver, no shared state outside the report being built. Input order is
//! iteration order, which fixes the ordering of every `broken_links` list.

use std::collections::HashSet;

use log::warn;

use crate::config::MAX_ANCESTOR_DEPTH;
use crate::error_handling::{ReportError, ReportStats, ResolveError, SkipReason};
use crate::report::models::{Block, BlockResolver, BrokenLinkEntry};
use crate::report::node::ReportNode;

/// What to do when an entry's block (or one of its ancestors) cannot be
/// resolved against the content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Abort the whole build; no partial report is returned. This is the
    /// reference behavior.
    #[default]
    Fail,
    /// Log a warning, count the entry in [`ReportStats`], and continue.
    Skip,
}

/// Builds the broken-link report from artifact entries.
///
/// For each entry in input order: resolve the terminal block, walk its parent
/// chain to the top of the tree, then descend the report from the root,
/// lazily creating one node per ancestor (display name set on creation only).
/// The terminal node gets the block's editor URL (set once) and the link
/// appended to its `broken_links` list, duplicates included.
///
/// Nodes are shared: two entries whose ancestor chains overlap merge into the
/// same intermediate nodes.
///
/// # Errors
///
/// Resolution failures abort the build under [`UnresolvedPolicy::Fail`] and
/// are skipped (with a warning and a stats bump) under
/// [`UnresolvedPolicy::Skip`]. A cyclic or implausibly deep parent chain
/// always fails the build; it means the content tree itself is malformed.
pub fn build_report(
    entries: &[BrokenLinkEntry],
    resolver: &dyn BlockResolver,
    policy: UnresolvedPolicy,
    stats: &ReportStats,
) -> Result<ReportNode, ReportError> {
    let mut root = ReportNode::new();

    for entry in entries {
        let block = match resolver.resolve(&entry.block_id) {
            Ok(block) => block,
            Err(err @ ResolveError::NotFound(_)) => match policy {
                UnresolvedPolicy::Fail => return Err(err.into()),
                UnresolvedPolicy::Skip => {
                    warn!("Skipping broken-link entry for '{}': {}", entry.block_id, err);
                    stats.increment(SkipReason::UnresolvedBlock);
                    continue;
                }
            },
        };

        let chain = match ancestor_chain(&block, resolver) {
            Ok(chain) => chain,
            Err(ReportError::Resolution(err)) if policy == UnresolvedPolicy::Skip => {
                warn!(
                    "Skipping broken-link entry for '{}': ancestor lookup failed: {}",
                    entry.block_id, err
                );
                stats.increment(SkipReason::UnresolvedAncestor);
                continue;
            }
            Err(err) => return Err(err),
        };

        add_broken_link(&mut root, &chain, &entry.link);
    }

    Ok(root)
}

/// Collects a block's ancestor chain, ordered root-most ancestor first and
/// the block itself last.
///
/// The walk goes upward via `parent` until a block with no parent is reached,
/// then the collected sequence is reversed. A visited set and a depth bound
/// guard against malformed trees; neither triggers on well-formed content.
fn ancestor_chain(block: &Block, resolver: &dyn BlockResolver) -> Result<Vec<Block>, ReportError> {
    let mut chain = vec![block.clone()];
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(block.location.clone());

    let mut parent_id = block.parent.clone();
    while let Some(id) = parent_id {
        if !visited.insert(id.clone()) {
            return Err(ReportError::ParentCycle(id));
        }
        if chain.len() >= MAX_ANCESTOR_DEPTH {
            return Err(ReportError::DepthExceeded {
                block_id: block.location.clone(),
                max_depth: MAX_ANCESTOR_DEPTH,
            });
        }
        let parent = resolver.resolve(&id)?;
        parent_id = parent.parent.clone();
        chain.push(parent);
    }

    chain.reverse();
    Ok(chain)
}

/// Merges one broken link into the report along its ancestor chain.
///
/// `chain` is root-most first; its last element is the terminal block. Each
/// step gets-or-inserts a child keyed by the block's location, so entries
/// with overlapping chains mutate the same shared nodes.
fn add_broken_link(root: &mut ReportNode, chain: &[Block], link: &str) {
    let mut node = root;
    for block in chain {
        node = node
            .children
            .entry(block.location.clone())
            .or_insert_with(|| ReportNode::labeled(block.display_name.clone()));
    }

    // `node` is now the terminal block's node. The URL comes from the
    // terminal block's own attributes and is only written once.
    if node.url.is_none() {
        if let Some(terminal) = chain.last() {
            node.url = Some(terminal.editor_url());
        }
    }
    node.broken_links.push(link.to_string());
}
