//! Configuration schema definitions.
//!
//! A dispatch table file describes how paths are split into keys and which
//! value each path maps to. All types derive Serde traits for deserialization.

use serde::{Deserialize, Serialize};

use crate::trie::SwitchBuilder;

/// Root configuration of a dispatch table.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TableConfig {
    /// How entry paths (and lookup arguments) are split into keys.
    pub keys: KeyMode,

    /// Logging settings used by the CLI.
    pub logging: LoggingConfig,

    /// Path/value pairs, applied in file order.
    pub entries: Vec<EntryConfig>,
}

/// Key splitting strategy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum KeyMode {
    /// Every character is one key.
    Chars,
    /// Keys are the pieces between separators (e.g. `users/list`).
    Segments {
        #[serde(default = "default_separator")]
        separator: String,
    },
}

impl Default for KeyMode {
    fn default() -> Self {
        KeyMode::Segments {
            separator: default_separator(),
        }
    }
}

fn default_separator() -> String {
    "/".to_string()
}

impl KeyMode {
    /// Split `path` into keys. The empty string is the empty path.
    pub fn split(&self, path: &str) -> Vec<String> {
        match self {
            KeyMode::Chars => path.chars().map(String::from).collect(),
            KeyMode::Segments { .. } if path.is_empty() => Vec::new(),
            KeyMode::Segments { separator } => {
                path.split(separator.as_str()).map(str::to_owned).collect()
            }
        }
    }
}

/// A single path → value mapping.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntryConfig {
    pub path: String,

    pub value: String,

    /// Overwrite a value already stored at this path (default: true).
    #[serde(default = "default_replace")]
    pub replace: bool,
}

fn default_replace() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,

    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

impl TableConfig {
    pub fn split_path(&self, path: &str) -> Vec<String> {
        self.keys.split(path)
    }

    /// Feed every entry into a fresh builder.
    pub fn to_builder(&self) -> SwitchBuilder<String, String> {
        let mut builder = SwitchBuilder::new();
        for entry in &self.entries {
            builder.add_with(self.split_path(&entry.path), entry.value.clone(), entry.replace);
        }

        tracing::debug!(entries = self.entries.len(), "Dispatch table loaded into builder");
        builder
    }
}
