//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Library code emits tracing events:
//!     → trie builder (debug: build requested)
//!     → compiler (debug: node/terminus counts)
//!     → dispatcher (warn: panicking key impls)
//!     → config loader (info: table loaded)
//!
//! Consumers:
//!     → logging.rs (fmt subscriber installed by the CLI)
//!     → any subscriber the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber itself
//! - Dispatch hot path logs nothing on success

pub mod logging;

pub use logging::init_logging;
