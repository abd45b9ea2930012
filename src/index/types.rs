//! Types for the suffix trie
//!
//! Nodes live in a flat arena owned by [`SuffixIndex`](super::SuffixIndex)
//! and refer to their children by [`NodeId`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Index of a node in the arena
pub type NodeId = u32;

/// The root node, representing the empty prefix
pub const ROOT: NodeId = 0;

/// A trie node: one position reached by descending from the root
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) children: FxHashMap<char, NodeId>,
    pub(crate) occurrences: u64,
    pub(crate) origin_line: usize,
    pub(crate) origin_offset: usize,
}

impl Node {
    pub(crate) fn new(origin_line: usize, origin_offset: usize) -> Self {
        Self {
            children: FxHashMap::default(),
            occurrences: 1,
            origin_line,
            origin_offset,
        }
    }

    /// Number of inserted suffixes whose path passes through this node,
    /// including the one that created it
    pub fn occurrences(&self) -> u64 {
        self.occurrences
    }

    /// Line number of the insertion that created this node
    pub fn origin_line(&self) -> usize {
        self.origin_line
    }

    /// Character offset of the insertion that created this node
    pub fn origin_offset(&self) -> usize {
        self.origin_offset
    }

    /// Child reached by the (already folded) character `c`
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Outcome of walking a query down the trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupResult {
    /// Whether the whole query was consumed
    pub matched: bool,
    /// Characters consumed before the walk completed or stopped
    pub matched_len: usize,
    /// Deepest node reached (the root if nothing matched)
    pub landing: NodeId,
}

/// Build-time options for the corpus loader
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Truncate every suffix to this many characters before insertion.
    /// `None` inserts full suffixes; with a cap, longer queries never match.
    pub max_suffix_len: Option<usize>,
    /// Show a progress bar while inserting lines
    pub show_progress: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_suffix_len: None,
            show_progress: true,
        }
    }
}

/// Summary figures for a built index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Lines read from the source document
    pub line_count: usize,
    /// Number of `insert` calls made by the loader
    pub suffix_count: u64,
    /// Nodes in the trie, root included
    pub node_count: usize,
    /// Length of the longest path from the root
    pub max_depth: usize,
    /// Wall-clock time spent inserting suffixes
    pub build_time_ms: u64,
}
