//! Public builder over the dispatch trie.

use std::hash::Hash;

use crate::dispatch::{compile, Dispatcher};
use crate::trie::node::{Replace, TrieNode};

/// Collects `(path, value)` pairs and compiles them into a [`Dispatcher`].
///
/// ```
/// use switch_dispatch::SwitchBuilder;
///
/// let mut builder = SwitchBuilder::new();
/// builder.add("ACF".chars(), "acf");
/// builder.add("AG".chars(), "ag");
///
/// let dispatcher = builder.build();
/// assert_eq!(dispatcher.dispatch(&['A', 'G']), Some(&"ag"));
/// assert_eq!(dispatcher.dispatch(&['A', 'C']), None);
/// ```
#[derive(Debug)]
pub struct SwitchBuilder<K, V> {
    root: TrieNode<K, V>,
    paths: usize,
}

impl<K, V> Default for SwitchBuilder<K, V> {
    fn default() -> Self {
        Self {
            root: TrieNode::root(),
            paths: 0,
        }
    }
}

impl<K, V> Clone for SwitchBuilder<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            paths: self.paths,
        }
    }
}

impl<K, V> SwitchBuilder<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path, overwriting any value already stored at its end.
    pub fn add<P>(&mut self, path: P, value: V)
    where
        P: IntoIterator<Item = K>,
    {
        self.add_with(path, value, Replace::Overwrite);
    }

    /// Add a path with an explicit replace policy (`bool` or [`Replace`]).
    pub fn add_with<P, R>(&mut self, path: P, value: V, replace: R)
    where
        P: IntoIterator<Item = K>,
        R: Into<Replace>,
    {
        let keys: Vec<K> = path.into_iter().collect();
        self.root.insert(&keys, value, replace.into());
        self.paths += 1;
    }

    /// Root of the trie built so far.
    pub fn root(&self) -> &TrieNode<K, V> {
        &self.root
    }

    /// True when nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.paths == 0
    }
}

impl<K, V> SwitchBuilder<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Compile the current trie.
    ///
    /// The dispatcher owns a snapshot: paths added after this call are only
    /// seen by dispatchers built later.
    pub fn build(&self) -> Dispatcher<K, V> {
        tracing::debug!(paths_added = self.paths, "Building dispatcher");
        compile(&self.root)
    }
}

impl<K, V, P> Extend<(P, V)> for SwitchBuilder<K, V>
where
    K: Eq + Hash + Clone,
    P: IntoIterator<Item = K>,
{
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.add(path, value);
        }
    }
}

impl<K, V, P> FromIterator<(P, V)> for SwitchBuilder<K, V>
where
    K: Eq + Hash + Clone,
    P: IntoIterator<Item = K>,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}
