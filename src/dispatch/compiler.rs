//! Trie compilation.
//!
//! # Responsibilities
//! - Freeze the builder's trie into a shared snapshot
//! - Measure the trie (node count, termini, deepest level)
//! - Hand back a ready-to-call [`Dispatcher`]

use std::hash::Hash;
use std::sync::Arc;

use serde::Serialize;

use crate::dispatch::dispatcher::Dispatcher;
use crate::trie::TrieNode;

/// Shape of a compiled trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// All nodes, root included.
    pub nodes: usize,
    /// Nodes holding a value.
    pub termini: usize,
    /// Depth of the deepest node (0 for a lone root).
    pub max_depth: usize,
}

impl TrieStats {
    pub fn collect<K, V>(root: &TrieNode<K, V>) -> Self {
        let mut stats = TrieStats::default();
        let mut pending = vec![root];

        while let Some(node) = pending.pop() {
            stats.nodes += 1;
            if node.is_terminus() {
                stats.termini += 1;
            }
            stats.max_depth = stats.max_depth.max(node.depth());
            pending.extend(node.children());
        }

        stats
    }
}

/// Compile `root` into a dispatcher over a private copy of the trie.
pub fn compile<K, V>(root: &TrieNode<K, V>) -> Dispatcher<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let stats = TrieStats::collect(root);

    tracing::debug!(
        nodes = stats.nodes,
        termini = stats.termini,
        max_depth = stats.max_depth,
        "Compiled dispatch trie"
    );

    Dispatcher::new(Arc::new(root.clone()), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::Replace;

    #[test]
    fn test_stats_of_empty_trie() {
        let root: TrieNode<char, u8> = TrieNode::root();
        assert_eq!(
            TrieStats::collect(&root),
            TrieStats { nodes: 1, termini: 0, max_depth: 0 }
        );
    }

    #[test]
    fn test_stats_count_shared_prefixes_once() {
        let mut root = TrieNode::root();
        for (path, value) in [("ACF", 1), ("ACV", 2), ("AG", 3), ("EC", 4)] {
            let keys: Vec<char> = path.chars().collect();
            root.insert(&keys, value, Replace::Overwrite);
        }

        // root, A, AC, ACF, ACV, AG, E, EC
        assert_eq!(
            TrieStats::collect(&root),
            TrieStats { nodes: 8, termini: 4, max_depth: 3 }
        );
    }

    #[test]
    fn test_compile_copies_trie() {
        let mut root = TrieNode::root();
        root.insert(&['A'], 1, Replace::Overwrite);
        let dispatcher = compile(&root);

        root.insert(&['A'], 2, Replace::Overwrite);

        assert_eq!(dispatcher.dispatch(&['A']), Some(&1));
        assert_eq!(dispatcher.stats().termini, 1);
    }
}
