//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Compilation (once per build):
//!     TrieNode tree
//!     → compiler.rs (snapshot + stats)
//!     → Dispatcher (immutable, Arc-shared)
//!
//! Lookup (per call):
//!     key sequence
//!     → dispatcher.rs (one child lookup per depth level)
//!     → Return: Some(value) or None (NOT_FOUND)
//! ```
//!
//! # Design Decisions
//! - Interpreted walk over the snapshot instead of generated code
//! - Exact-path matching: every key must be consumed to hit a value
//! - NOT_FOUND is `None`; all irregular input collapses into it
//! - Dispatchers are read-only and safe to share across threads

pub mod compiler;
pub mod dispatcher;

pub use compiler::{compile, TrieStats};
pub use dispatcher::Dispatcher;
