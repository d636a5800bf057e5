//! Compiled lookup over a frozen trie.
//!
//! # Responsibilities
//! - Walk the snapshot one level per key, starting at the root
//! - Return the value of the node reached once all keys are consumed
//! - Convert any panic raised by user key impls into NOT_FOUND
//!
//! # Design Decisions
//! - No allocation and no interior mutability on the lookup path
//! - Cloning a dispatcher only bumps the snapshot's reference count

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::dispatch::compiler::TrieStats;
use crate::trie::TrieNode;

/// Callable produced by [`SwitchBuilder::build`](crate::SwitchBuilder::build).
pub struct Dispatcher<K, V> {
    root: Arc<TrieNode<K, V>>,
    stats: TrieStats,
}

impl<K, V> Clone for Dispatcher<K, V> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
            stats: self.stats,
        }
    }
}

impl<K, V> fmt::Debug for Dispatcher<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<K, V> Dispatcher<K, V> {
    pub(crate) fn new(root: Arc<TrieNode<K, V>>, stats: TrieStats) -> Self {
        Self { root, stats }
    }

    pub fn stats(&self) -> TrieStats {
        self.stats
    }

    /// Number of paths that resolve to a value.
    pub fn len(&self) -> usize {
        self.stats.termini
    }

    pub fn is_empty(&self) -> bool {
        self.stats.termini == 0
    }
}

impl<K, V> Dispatcher<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Look up the value stored at exactly `keys`.
    ///
    /// Returns `None` when a key has no matching child, when `keys` stops at a
    /// branch node, or when key hashing/comparison panics. A caught panic
    /// still goes through the process panic hook, so the default hook prints
    /// it to stderr before `None` is returned.
    pub fn dispatch(&self, keys: &[K]) -> Option<&V> {
        if self.is_empty() {
            return None;
        }

        self.guarded(|| {
            let mut node = &*self.root;
            loop {
                let Some(key) = keys.get(node.depth()) else {
                    return node.value();
                };
                node = node.child(key)?;
            }
        })
    }

    /// Same as [`dispatch`](Self::dispatch) for keys that are not in a slice,
    /// e.g. `dispatcher.dispatch_iter("ACF".chars())`.
    pub fn dispatch_iter<I>(&self, keys: I) -> Option<&V>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        if self.is_empty() {
            return None;
        }

        self.guarded(|| {
            let mut node = &*self.root;
            for key in keys {
                node = node.child(key.borrow())?;
            }
            node.value()
        })
    }

    pub fn contains(&self, keys: &[K]) -> bool {
        self.dispatch(keys).is_some()
    }

    /// Turn the dispatcher into a plain function returning owned values.
    pub fn into_fn(self) -> impl Fn(&[K]) -> Option<V> + Clone + Send + Sync
    where
        K: Send + Sync,
        V: Clone + Send + Sync,
    {
        move |keys: &[K]| self.dispatch(keys).cloned()
    }

    fn guarded<'a, F>(&'a self, walk: F) -> Option<&'a V>
    where
        F: FnOnce() -> Option<&'a V>,
    {
        match panic::catch_unwind(AssertUnwindSafe(walk)) {
            Ok(found) => found,
            Err(_) => {
                tracing::warn!("Key comparison panicked during dispatch, returning not found");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SwitchBuilder;
    use std::hash::Hasher;

    fn sample() -> Dispatcher<char, &'static str> {
        let mut builder = SwitchBuilder::new();
        builder.add("ACF".chars(), "acf");
        builder.add("ACV".chars(), "acv");
        builder.add("AG".chars(), "ag");
        builder.add("EC".chars(), "ec");
        builder.build()
    }

    #[test]
    fn test_dispatch_hits() {
        let d = sample();
        assert_eq!(d.dispatch(&['A', 'C', 'F']), Some(&"acf"));
        assert_eq!(d.dispatch(&['A', 'C', 'V']), Some(&"acv"));
        assert_eq!(d.dispatch(&['A', 'G']), Some(&"ag"));
        assert_eq!(d.dispatch(&['E', 'C']), Some(&"ec"));
    }

    #[test]
    fn test_dispatch_misses() {
        let d = sample();
        assert_eq!(d.dispatch(&['A', 'C', 'E']), None);
        assert_eq!(d.dispatch(&['A', 'C']), None);
        assert_eq!(d.dispatch(&['I']), None);
        assert_eq!(d.dispatch(&[]), None);
    }

    #[test]
    fn test_longer_input_past_terminus_misses() {
        let d = sample();
        assert_eq!(d.dispatch(&['A', 'G', 'X']), None);
        assert!(!d.contains(&['E', 'C', 'C']));
    }

    #[test]
    fn test_dispatch_iter_matches_slice_dispatch() {
        let d = sample();
        assert_eq!(d.dispatch_iter("ACV".chars()), Some(&"acv"));
        assert_eq!(d.dispatch_iter(['E', 'C'].iter()), Some(&"ec"));
        assert_eq!(d.dispatch_iter("AC".chars()), None);
        assert_eq!(d.dispatch_iter("".chars()), None);
    }

    #[test]
    fn test_empty_dispatcher_always_misses() {
        let d: Dispatcher<char, u8> = SwitchBuilder::new().build();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
        assert_eq!(d.dispatch(&[]), None);
        assert_eq!(d.dispatch(&['A']), None);
    }

    #[test]
    fn test_root_value_without_children() {
        let mut builder = SwitchBuilder::new();
        builder.add(std::iter::empty::<char>(), 5);
        let d = builder.build();

        assert_eq!(d.dispatch(&[]), Some(&5));
        assert_eq!(d.dispatch(&['A']), None);
    }

    #[test]
    fn test_into_fn_returns_owned_values() {
        let lookup = sample().into_fn();
        assert_eq!(lookup(&['A', 'G'][..]), Some("ag"));
        assert_eq!(lookup(&['A'][..]), None);
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Fragile(u8);

    impl Hash for Fragile {
        fn hash<H: Hasher>(&self, state: &mut H) {
            if self.0 == u8::MAX {
                panic!("unhashable key");
            }
            self.0.hash(state);
        }
    }

    #[test]
    fn test_panicking_key_is_not_found() {
        let mut builder = SwitchBuilder::new();
        builder.add([Fragile(1), Fragile(2)], "ok");
        let d = builder.build();

        assert_eq!(d.dispatch(&[Fragile(1), Fragile(2)]), Some(&"ok"));
        assert_eq!(d.dispatch(&[Fragile(1), Fragile(u8::MAX)]), None);
        assert_eq!(d.dispatch_iter([Fragile(u8::MAX)]), None);
    }
}
