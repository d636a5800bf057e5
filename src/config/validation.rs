//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject separators and paths that cannot be split into keys
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TableConfig → Result<(), Vec<ValidationError>>
//! - Conflicting entries are not errors; `replace` decides who wins

use thiserror::Error;

use crate::config::schema::{KeyMode, TableConfig};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("key separator must not be empty")]
    EmptySeparator,

    #[error("entry {index} has an empty segment in path {path:?}")]
    EmptySegment { index: usize, path: String },
}

pub fn validate_config(config: &TableConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let KeyMode::Segments { separator } = &config.keys {
        if separator.is_empty() {
            errors.push(ValidationError::EmptySeparator);
        } else {
            for (index, entry) in config.entries.iter().enumerate() {
                if config.split_path(&entry.path).iter().any(String::is_empty) {
                    errors.push(ValidationError::EmptySegment {
                        index,
                        path: entry.path.clone(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EntryConfig;

    fn entry(path: &str) -> EntryConfig {
        EntryConfig {
            path: path.into(),
            value: "v".into(),
            replace: true,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = TableConfig {
            entries: vec![entry(""), entry("a"), entry("a/b")],
            ..TableConfig::default()
        };
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_empty_separator() {
        let config = TableConfig {
            keys: KeyMode::Segments { separator: String::new() },
            entries: vec![entry("a")],
            ..TableConfig::default()
        };
        assert_eq!(validate_config(&config), Err(vec![ValidationError::EmptySeparator]));
    }

    #[test]
    fn test_reports_every_empty_segment() {
        let config = TableConfig {
            entries: vec![entry("a//b"), entry("ok"), entry("/lead"), entry("trail/")],
            ..TableConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();

        let indices: Vec<usize> = errors
            .iter()
            .map(|e| match e {
                ValidationError::EmptySegment { index, .. } => *index,
                other => panic!("unexpected error {other:?}"),
            })
            .collect();
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn test_chars_mode_accepts_anything() {
        let config = TableConfig {
            keys: KeyMode::Chars,
            entries: vec![entry("//"), entry("")],
            ..TableConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
