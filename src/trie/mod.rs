//! Trie construction subsystem.
//!
//! # Data Flow
//! ```text
//! (path, value, replace) pairs
//!     → builder.rs (SwitchBuilder::add / add_with)
//!     → node.rs (depth-indexed recursive insertion)
//!     → TrieNode tree (mutable, single owner)
//!     → dispatch::compile (snapshot into Dispatcher)
//! ```
//!
//! # Design Decisions
//! - Owned tree: each node exclusively owns its children, no parent links
//! - Presence of a value is an explicit `Option`, never a default sentinel
//! - Insertion never fails; any key sequence (including empty) is accepted
//! - No synchronization: callers serialize writes themselves

pub mod builder;
pub mod node;

pub use builder::SwitchBuilder;
pub use node::{Replace, TrieNode};
