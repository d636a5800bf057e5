//! Nested-switch dispatch over key sequences.
//!
//! Paths of discrete keys are inserted into a trie whose levels mirror nested
//! `match` statements, then compiled once into a [`Dispatcher`] that maps a key
//! sequence to its value, or `None` when no inserted path matches exactly.
//!
//! ```text
//!  add(path, value, replace)          build()              dispatch(keys)
//! ───────────────────────────▶ trie ─────────▶ Dispatcher ───────────────▶ Some(&V) | None
//! ```

pub mod config;
pub mod dispatch;
pub mod observability;
pub mod trie;

pub use config::TableConfig;
pub use dispatch::{Dispatcher, TrieStats};
pub use trie::{Replace, SwitchBuilder, TrieNode};
