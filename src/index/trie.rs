//! Uncompressed suffix trie
//!
//! Every suffix of every line is inserted character by character. Shared
//! prefixes reuse existing nodes and bump their occurrence counts, so a
//! node's count is the number of inserted suffixes that pass through it.
//!
//! Insertion and lookup run the same walk; insertion additionally counts
//! each node it steps onto. Plain lookups never touch the counters.

use super::types::*;
use crate::utils::fold_chars;

/// Character-keyed trie over the suffixes of a document
#[derive(Debug, Clone)]
pub struct SuffixIndex {
    /// Node arena; `nodes[ROOT]` is the empty prefix
    nodes: Vec<Node>,
    /// Nodes stepped onto by the last insertion walk (reused buffer)
    path: Vec<NodeId>,
    /// Number of non-empty insertions
    inserts: u64,
    max_depth: usize,
}

impl Default for SuffixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixIndex {
    /// Create an index holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0, 0)],
            path: Vec::new(),
            inserts: 0,
            max_depth: 0,
        }
    }

    /// Insert `text`, recording `(line, offset)` on any node it creates.
    ///
    /// Every existing node on the path gets its occurrence count bumped;
    /// new nodes start at 1. Existing nodes keep the origin of whichever
    /// insertion created them.
    pub fn insert(&mut self, text: &str, line: usize, offset: usize) {
        if text.is_empty() {
            return;
        }

        let chars = fold_chars(text);
        self.inserts += 1;
        self.max_depth = self.max_depth.max(chars.len());

        let mut path = std::mem::take(&mut self.path);
        path.clear();
        let found = self.walk(&chars, |id| path.push(id));
        for &id in &path {
            self.nodes[id as usize].occurrences += 1;
        }
        self.path = path;

        if found.matched {
            return;
        }

        let mut current = found.landing;
        for &c in &chars[found.matched_len..] {
            current = self.add_child(current, c, line, offset);
        }
    }

    /// Look up `text` without modifying the index.
    ///
    /// The empty string always matches at the root.
    pub fn lookup(&self, text: &str) -> LookupResult {
        if text.is_empty() {
            return LookupResult {
                matched: true,
                matched_len: 0,
                landing: ROOT,
            };
        }

        self.walk(&fold_chars(text), |_| {})
    }

    /// Descend from the root one character at a time, calling `on_step`
    /// for each node landed on. Stops at the first missing edge.
    fn walk(&self, chars: &[char], mut on_step: impl FnMut(NodeId)) -> LookupResult {
        let mut current = ROOT;

        for (i, &c) in chars.iter().enumerate() {
            match self.nodes[current as usize].child(c) {
                Some(next) => {
                    current = next;
                    on_step(next);
                }
                None => {
                    return LookupResult {
                        matched: false,
                        matched_len: i,
                        landing: current,
                    };
                }
            }
        }

        LookupResult {
            matched: true,
            matched_len: chars.len(),
            landing: current,
        }
    }

    fn add_child(&mut self, parent: NodeId, c: char, line: usize, offset: usize) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Node::new(line, offset));
        self.nodes[parent as usize].children.insert(c, id);
        id
    }

    /// Access a node by id.
    ///
    /// # Panics
    /// If `id` did not come from this index.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT as usize]
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of non-empty strings inserted so far
    pub fn insert_count(&self) -> u64 {
        self.inserts
    }

    /// Length of the longest inserted string, i.e. the trie's depth
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
