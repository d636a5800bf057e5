//! Trie nodes and path insertion.
//!
//! # Responsibilities
//! - Hold the key that led to a node, its optional value and its children
//! - Insert a path one depth level at a time
//! - Apply the overwrite / keep-existing policy at the path terminus
//!
//! # Design Decisions
//! - Insert, clone and drop walk the tree with loops, never recursion,
//!   so path length is bounded by memory rather than stack size

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// What to do when a path already ends in a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Replace {
    /// Overwrite the stored value.
    #[default]
    Overwrite,
    /// Leave the stored value untouched; the new one is dropped.
    KeepExisting,
}

impl From<bool> for Replace {
    fn from(replace: bool) -> Self {
        if replace {
            Replace::Overwrite
        } else {
            Replace::KeepExisting
        }
    }
}

/// A node of the dispatch trie.
///
/// The node at depth `d` is reached by consuming `d` keys from the root.
pub struct TrieNode<K, V> {
    key: Option<K>,
    value: Option<V>,
    children: HashMap<K, TrieNode<K, V>>,
    depth: usize,
}

impl<K, V> Default for TrieNode<K, V> {
    fn default() -> Self {
        Self::root()
    }
}

impl<K, V> TrieNode<K, V> {
    /// Create an empty root node (no key, depth 0).
    pub fn root() -> Self {
        Self {
            key: None,
            value: None,
            children: HashMap::new(),
            depth: 0,
        }
    }

    /// Key that led to this node from its parent; `None` at the root.
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn children(&self) -> impl Iterator<Item = &TrieNode<K, V>> {
        self.children.values()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when some inserted path ends exactly here.
    pub fn is_terminus(&self) -> bool {
        self.value.is_some()
    }

    /// True when this node only routes to deeper children.
    pub fn is_branch(&self) -> bool {
        self.value.is_none() && !self.children.is_empty()
    }
}

impl<K, V> TrieNode<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn child<Q>(&self, key: &Q) -> Option<&TrieNode<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.children.get(key)
    }

    /// Insert `value` at the end of `keys`.
    ///
    /// `keys` is always the full path; this node consumes `keys[self.depth]`.
    pub fn insert(&mut self, keys: &[K], value: V, replace: Replace) {
        let rest = keys.get(self.depth..).unwrap_or_default();

        let mut node = self;
        for key in rest {
            let depth = node.depth + 1;
            node = node.children.entry(key.clone()).or_insert_with(|| TrieNode {
                key: Some(key.clone()),
                value: None,
                children: HashMap::new(),
                depth,
            });
        }

        match replace {
            Replace::Overwrite => node.value = Some(value),
            Replace::KeepExisting => {
                if node.value.is_none() {
                    node.value = Some(value);
                }
            }
        }
    }
}

impl<K, V> TrieNode<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone_detached(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            children: HashMap::new(),
            depth: self.depth,
        }
    }
}

impl<K, V> Clone for TrieNode<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        // Breadth-first listing: every descendant sits after its parent.
        let mut order: Vec<(Option<usize>, &K, &TrieNode<K, V>)> = Vec::new();
        order.extend(self.children.iter().map(|(key, child)| (None, key, child)));
        let mut next = 0;
        while let Some(&(_, _, node)) = order.get(next) {
            order.extend(node.children.iter().map(|(key, child)| (Some(next), key, child)));
            next += 1;
        }

        let mut copies: Vec<Option<TrieNode<K, V>>> = order
            .iter()
            .map(|(_, _, node)| Some(node.clone_detached()))
            .collect();

        // Deepest first, so each copy is complete before joining its parent.
        let mut root = self.clone_detached();
        for (index, (parent, key, _)) in order.iter().enumerate().rev() {
            let Some(copy) = copies[index].take() else {
                continue;
            };
            let parent = match parent {
                Some(parent) => copies[*parent].as_mut(),
                None => Some(&mut root),
            };
            if let Some(parent) = parent {
                parent.children.insert((*key).clone(), copy);
            }
        }

        root
    }
}

impl<K, V> Drop for TrieNode<K, V> {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode<K, V>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<K, V> fmt::Debug for TrieNode<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("depth", &self.depth)
            .field("children", &self.children.len())
            .finish()
    }
}
