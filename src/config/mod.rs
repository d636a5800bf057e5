//! Dispatch table configuration.
//!
//! # Data Flow
//! ```text
//! table file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → TableConfig (validated, immutable)
//!     → TableConfig::to_builder (entries applied in file order)
//!     → SwitchBuilder<String, String> → Dispatcher
//! ```
//!
//! # Design Decisions
//! - All sections have defaults so a table may list only `[[entries]]`
//! - Validation separates syntactic (serde) from semantic checks
//! - Entries keep their own `replace` flag, so file order matters

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{EntryConfig, KeyMode, LogFormat, LoggingConfig, TableConfig};
pub use validation::ValidationError;
